//! # HTTP surface
//!
//! One route: `GET /process?url=<youtube url>`. Success returns the full
//! [`ProcessedVideo`] JSON body; any failure returns `{"error": <message>}`
//! with 400 for validation/business-rule rejections and 500 for upstream
//! failures. Cross-origin requests are allowed from any origin.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tower_http::cors::CorsLayer;

use crate::{
    error::Error,
    llm::ArticleGenerator,
    types::ProcessedVideo,
    yt::{DurationLookup, EmbedLookup, TranscriptSource},
    VideoPipeline,
};

#[derive(Debug, Deserialize)]
pub struct ProcessParams {
    url: Option<String>,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

pub fn router<D, E, T, G>(pipeline: VideoPipeline<D, E, T, G>) -> Router
where
    D: DurationLookup + Send + Sync + 'static,
    E: EmbedLookup + Send + Sync + 'static,
    T: TranscriptSource + Send + Sync + 'static,
    G: ArticleGenerator + Send + Sync + 'static,
{
    Router::new()
        .route("/process", get(process_video::<D, E, T, G>))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(pipeline))
}

#[tracing::instrument(skip(pipeline))]
async fn process_video<D, E, T, G>(
    State(pipeline): State<Arc<VideoPipeline<D, E, T, G>>>,
    Query(params): Query<ProcessParams>,
) -> Result<Json<ProcessedVideo>, Error>
where
    D: DurationLookup + Send + Sync + 'static,
    E: EmbedLookup + Send + Sync + 'static,
    T: TranscriptSource + Send + Sync + 'static,
    G: ArticleGenerator + Send + Sync + 'static,
{
    let url = params
        .url
        .filter(|url| !url.is_empty())
        .ok_or(Error::MissingUrl)?;

    let processed = pipeline.process(&url).await?;

    Ok(Json(processed))
}

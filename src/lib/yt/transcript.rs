use std::{collections::HashMap, ops::Deref};

use serde::Deserialize;

use crate::{
    error::Error,
    types::TranscriptBundle,
    yt::{TranscriptSource, ACCEPT_LANGUAGE, BROWSER_USER_AGENT},
};

/// Client for the submagic transcription service.
#[derive(Default)]
pub struct SubmagicClient(pub reqwest::Client);

impl Deref for SubmagicClient {
    type Target = reqwest::Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranscriptionResponse {
    thumbnail_url: Option<String>,
    transcripts: Option<HashMap<String, String>>,
}

impl TranscriptSource for SubmagicClient {
    const ENDPOINT: &str = "https://submagic-free-tools.fly.dev/api/youtube-transcription";

    async fn fetch_transcript(&self, video_url: &str) -> Result<TranscriptBundle, Error> {
        let response = self
            .post(Self::ENDPOINT)
            .header("Accept", "*/*")
            .header("Accept-Language", ACCEPT_LANGUAGE)
            .header("Origin", "https://submagic-free-tools.fly.dev")
            .header("User-Agent", BROWSER_USER_AGENT)
            .json(&serde_json::json!({ "url": video_url }))
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to reach transcription service"))?
            .json::<TranscriptionResponse>()
            .await?;

        let transcript = response
            .transcripts
            .and_then(|mut transcripts| transcripts.remove("en"));

        Ok(TranscriptBundle {
            thumbnail_url: response.thumbnail_url,
            transcript,
        })
    }
}

use std::ops::Deref;

use serde::Deserialize;

use crate::{
    error::Error,
    yt::{DurationLookup, ACCEPT_LANGUAGE, BROWSER_USER_AGENT},
};

/// Client for the video-metadata lookup used by the duration gate.
#[derive(Default)]
pub struct YtMetadataClient(pub reqwest::Client);

impl Deref for YtMetadataClient {
    type Target = reqwest::Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    items: Option<Vec<VideoItem>>,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    #[serde(rename = "contentDetails")]
    content_details: Option<ContentDetails>,
}

#[derive(Debug, Deserialize)]
struct ContentDetails {
    duration: Option<String>,
}

impl DurationLookup for YtMetadataClient {
    const ENDPOINT: &str = "https://ytapi.apps.mattw.io/v3/videos";

    async fn video_duration(&self, video_id: &str) -> Result<String, Error> {
        let response = self
            .get(Self::ENDPOINT)
            .query(&[("key", "foo"), ("part", "contentDetails"), ("id", video_id)])
            .header("Accept", "application/json, text/javascript, */*; q=0.01")
            .header("Accept-Language", ACCEPT_LANGUAGE)
            .header("Origin", "https://mattw.io")
            .header("Referer", "https://mattw.io/")
            .header("User-Agent", BROWSER_USER_AGENT)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to reach metadata lookup"))?
            .json::<VideoListResponse>()
            .await?;

        response
            .items
            .and_then(|items| items.into_iter().next())
            .and_then(|item| item.content_details)
            .and_then(|details| details.duration)
            .ok_or(Error::UpstreamShape(
                "Failed to get items[0]['contentDetails']['duration'] from video list response",
            ))
    }
}

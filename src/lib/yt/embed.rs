use std::ops::Deref;

use serde::Deserialize;

use crate::{
    error::Error,
    yt::{EmbedLookup, ACCEPT_LANGUAGE, BROWSER_USER_AGENT},
};

/// Client for the noembed.com embed-metadata service.
#[derive(Default)]
pub struct NoembedClient(pub reqwest::Client);

impl Deref for NoembedClient {
    type Target = reqwest::Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Debug, Deserialize)]
struct EmbedResponse {
    author_url: Option<String>,
}

impl EmbedLookup for NoembedClient {
    const ENDPOINT: &str = "https://noembed.com/embed";

    async fn author_url(&self, video_url: &str) -> Result<Option<String>, Error> {
        let response = self
            .get(Self::ENDPOINT)
            .query(&[("url", video_url)])
            .header("Accept", "*/*")
            .header("Accept-Language", ACCEPT_LANGUAGE)
            .header("Origin", "https://tubepilot.ai")
            .header("User-Agent", BROWSER_USER_AGENT)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to reach embed lookup"))?
            .json::<EmbedResponse>()
            .await?;

        // No format validation; downstream only embeds it in the prompt.
        Ok(response.author_url)
    }
}

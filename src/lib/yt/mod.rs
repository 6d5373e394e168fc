pub mod embed;
pub mod metadata;
pub mod transcript;

use std::future::Future;

use crate::{error::Error, types::TranscriptBundle};

/// User-Agent sent on every outbound call; upstreams expect a browser client.
pub(crate) const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

pub(crate) const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9,de;q=0.8";

/// Resolves the raw duration token for a video id.
pub trait DurationLookup {
    const ENDPOINT: &str;

    fn video_duration(&self, video_id: &str)
        -> impl Future<Output = Result<String, Error>> + Send;
}

/// Resolves the uploader's profile URL from an embed-metadata service.
/// Absence of the field is not an error.
pub trait EmbedLookup {
    const ENDPOINT: &str;

    fn author_url(
        &self,
        video_url: &str,
    ) -> impl Future<Output = Result<Option<String>, Error>> + Send;
}

/// Fetches the English transcript and thumbnail for a video URL.
pub trait TranscriptSource {
    const ENDPOINT: &str;

    fn fetch_transcript(
        &self,
        video_url: &str,
    ) -> impl Future<Output = Result<TranscriptBundle, Error>> + Send;
}

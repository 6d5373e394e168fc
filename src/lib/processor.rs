pub mod builder;

use crate::{
    error::Error,
    llm::ArticleGenerator,
    parser::extract_video_id,
    types::{ArticleResult, DurationInfo, ProcessedVideo, VideoReference},
    yt::{DurationLookup, EmbedLookup, TranscriptSource},
};

/// The core video-to-article pipeline.
///
/// Strictly linear: each stage's output feeds the next, the first failing
/// stage aborts the request and discards everything fetched before it.
pub struct VideoPipeline<D, E, T, G>
where
    D: DurationLookup + Send + Sync + 'static,
    E: EmbedLookup + Send + Sync + 'static,
    T: TranscriptSource + Send + Sync + 'static,
    G: ArticleGenerator + Send + Sync + 'static,
{
    duration_lookup: D,
    embed_lookup: E,
    transcript_source: T,
    generator: G,
}

impl<D, E, T, G> VideoPipeline<D, E, T, G>
where
    D: DurationLookup + Send + Sync + 'static,
    E: EmbedLookup + Send + Sync + 'static,
    T: TranscriptSource + Send + Sync + 'static,
    G: ArticleGenerator + Send + Sync + 'static,
{
    /// Videos longer than this are rejected before any further upstream call.
    const MAX_DURATION_MINUTES: f64 = 30.0;

    #[tracing::instrument(skip(self))]
    pub async fn process(&self, url: &str) -> Result<ProcessedVideo, Error> {
        let video = VideoReference {
            video_id: extract_video_id(url).ok_or(Error::InvalidUrl)?,
            url: url.to_string(),
        };

        let duration = self.check_duration(&video).await?;
        let author_url = self.embed_lookup.author_url(&video.url).await?;
        let (transcript, thumbnail_url) = self.fetch_transcript(&video).await?;

        let raw = self
            .generator
            .generate_article(&transcript, author_url.as_deref())
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to generate article"))?;
        let article = ArticleResult::from_raw(raw);

        Ok(ProcessedVideo {
            thumbnail_url,
            article: article.cleaned,
            author_url,
            duration_minutes: duration.total_minutes,
        })
    }

    /// Resolves the video duration and enforces the length gate. Exactly
    /// 30 minutes still passes.
    #[tracing::instrument(skip(self))]
    async fn check_duration(&self, video: &VideoReference) -> Result<DurationInfo, Error> {
        let token = self.duration_lookup.video_duration(&video.video_id).await?;
        let duration = DurationInfo::from_token(token);

        if duration.total_minutes > Self::MAX_DURATION_MINUTES {
            tracing::info!(
                minutes = duration.total_minutes,
                video_id = %video.video_id,
                "Rejecting video over duration limit"
            );
            return Err(Error::DurationExceeded);
        }

        Ok(duration)
    }

    /// Fetches the transcript bundle and enforces that both the transcript
    /// and the thumbnail came back non-empty.
    #[tracing::instrument(skip(self))]
    async fn fetch_transcript(&self, video: &VideoReference) -> Result<(String, String), Error> {
        let bundle = self.transcript_source.fetch_transcript(&video.url).await?;

        match (bundle.transcript, bundle.thumbnail_url) {
            (Some(transcript), Some(thumbnail_url))
                if !transcript.is_empty() && !thumbnail_url.is_empty() =>
            {
                Ok((transcript, thumbnail_url))
            }
            _ => Err(Error::MissingTranscriptOrThumbnail),
        }
    }
}

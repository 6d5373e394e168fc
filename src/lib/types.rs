use serde::Serialize;

use crate::{cleaner::clean_response, parser::parse_duration};

/// A resolved video: the 11-character id plus the URL it came from.
#[derive(Debug, Clone)]
pub struct VideoReference {
    pub video_id: String,
    pub url: String,
}

/// Duration as reported by the metadata lookup, kept alongside the
/// total minutes derived from the ISO-8601-like token.
#[derive(Debug, Clone)]
pub struct DurationInfo {
    pub token: String,
    pub total_minutes: f64,
}

impl DurationInfo {
    pub fn from_token(token: String) -> Self {
        let total_minutes = parse_duration(&token);
        DurationInfo {
            token,
            total_minutes,
        }
    }
}

/// Raw transcription lookup result. Either field may be missing; the
/// pipeline decides whether that is fatal.
#[derive(Debug, Clone, Default)]
pub struct TranscriptBundle {
    pub thumbnail_url: Option<String>,
    pub transcript: Option<String>,
}

/// Generator output before and after artifact stripping.
#[derive(Debug, Clone)]
pub struct ArticleResult {
    pub raw: String,
    pub cleaned: String,
}

impl ArticleResult {
    pub fn from_raw(raw: String) -> Self {
        let cleaned = clean_response(&raw);
        ArticleResult { raw, cleaned }
    }
}

/// The 200 response body for `/process`.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedVideo {
    pub thumbnail_url: String,
    pub article: String,
    pub author_url: Option<String>,
    pub duration_minutes: f64,
}

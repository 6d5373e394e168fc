//! # URL and duration parsing
//!
//! Extracts the 11-character video id from the common YouTube URL shapes and
//! converts the metadata service's ISO-8601-like duration tokens to minutes.

use std::sync::LazyLock;

use regex::Regex;

static VIDEO_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:https?://)?(?:www\.)?(?:youtube\.com/(?:[^/]+/.*|(?:v|e(?:mbed)?|watch|.+\?.+)?/|.*[?&]v=)|youtu\.be/)([a-zA-Z0-9_-]{11})",
    )
    .unwrap()
});

/// Pulls the video id out of `watch?v=`, `youtu.be/`, `/v/`, `/embed/` and
/// `/e/` style URLs. First match wins; whether the id addresses a real video
/// is left to the duration lookup.
pub fn extract_video_id(url: &str) -> Option<String> {
    VIDEO_ID_RE
        .captures(url)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
}

/// Converts a duration token like `PT1H2M3S` to total minutes.
///
/// Each of the hour/minute/second components is optional and appears only
/// when nonzero. A token without the leading `PT` marker is treated as
/// unknown and yields 0 rather than an error.
pub fn parse_duration(token: &str) -> f64 {
    let Some(rest) = token.strip_prefix("PT") else {
        return 0.0;
    };

    let mut rest = rest;
    let mut minutes = 0.0;
    let mut seconds = 0.0;

    if let Some((hours, tail)) = rest.split_once('H') {
        minutes += hours.parse::<f64>().unwrap_or(0.0) * 60.0;
        rest = tail;
    }

    if let Some((mins, tail)) = rest.split_once('M') {
        minutes += mins.parse::<f64>().unwrap_or(0.0);
        rest = tail;
    }

    if let Some((secs, _)) = rest.split_once('S') {
        seconds = secs.parse::<f64>().unwrap_or(0.0);
    }

    minutes + seconds / 60.0
}

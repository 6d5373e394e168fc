//! # Generator output cleanup
//!
//! The chat endpoint wraps its answer in artifacts that are not part of the
//! article: a `$~~~$`-delimited preamble block, attribution boilerplate, and
//! stray brace-delimited JSON fragments. `clean_response` strips them in a
//! fixed order and normalizes blank lines.

use std::sync::LazyLock;

use regex::Regex;

/// Delimiter the generator uses around its preamble/thinking block.
const PREAMBLE_DELIMITER: &str = "$~~~$";

/// Residual marker length left after the second delimiter.
const RESIDUAL_MARKER_LEN: usize = 7;

static PREAMBLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\$~~~\$.*?\$~~~\$").unwrap());

static ATTRIBUTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)Generated by BLACKBOX\.AI.*?https://api\.blackbox\.ai\n*").unwrap()
});

// Non-greedy and single-line on purpose: nested or unrelated brace pairs on
// one line keep the historical behavior.
static BRACE_FRAGMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{.*?\}").unwrap());

static EXCESS_NEWLINES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Strips known generator artifacts and returns display-ready prose.
/// Deterministic text transformation, no I/O.
pub fn clean_response(response_text: &str) -> String {
    let mut cleaned = response_text.trim().to_string();

    if cleaned.matches(PREAMBLE_DELIMITER).count() >= 2 {
        cleaned = PREAMBLE_RE.replace_all(&cleaned, "").trim().to_string();
        cleaned = cleaned
            .chars()
            .skip(RESIDUAL_MARKER_LEN)
            .collect::<String>()
            .trim()
            .to_string();
    }

    cleaned = ATTRIBUTION_RE.replace_all(&cleaned, "").to_string();
    cleaned = BRACE_FRAGMENT_RE.replace_all(&cleaned, "").to_string();
    cleaned = EXCESS_NEWLINES_RE.replace_all(&cleaned, "\n\n").to_string();

    cleaned.trim().to_string()
}

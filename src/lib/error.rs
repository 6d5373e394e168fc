use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("URL parameter is required")]
    MissingUrl,
    #[error("Invalid YouTube URL")]
    InvalidUrl,
    #[error("Video duration exceeds 30 minutes")]
    DurationExceeded,
    #[error("Failed to get transcript or thumbnail")]
    MissingTranscriptOrThumbnail,
    #[error("Unexpected upstream response shape: {0}")]
    UpstreamShape(&'static str),
    #[error("Generation endpoint returned {status}: {message}")]
    Generation { status: u16, message: String },
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Validation and business-rule failures map to 400; everything an
    /// upstream does wrong maps to 500.
    pub fn status(&self) -> StatusCode {
        match self {
            Error::MissingUrl
            | Error::InvalidUrl
            | Error::DurationExceeded
            | Error::MissingTranscriptOrThumbnail => StatusCode::BAD_REQUEST,
            Error::UpstreamShape(_) | Error::Generation { .. } | Error::Http(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

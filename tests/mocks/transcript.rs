use std::sync::{Arc, Mutex};

use article_pulse::{types::TranscriptBundle, Error, TranscriptSource};

#[derive(Clone)]
pub struct MockTranscriptSource {
    pub thumbnail_url: Option<String>,
    pub transcript: Option<String>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockTranscriptSource {
    pub fn new(thumbnail_url: &str, transcript: &str) -> Self {
        Self {
            thumbnail_url: Some(thumbnail_url.to_string()),
            transcript: Some(transcript.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn empty() -> Self {
        Self {
            thumbnail_url: None,
            transcript: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl TranscriptSource for MockTranscriptSource {
    const ENDPOINT: &'static str = "http://mock.local/youtube-transcription";

    async fn fetch_transcript(&self, video_url: &str) -> Result<TranscriptBundle, Error> {
        self.calls.lock().unwrap().push(video_url.to_string());
        Ok(TranscriptBundle {
            thumbnail_url: self.thumbnail_url.clone(),
            transcript: self.transcript.clone(),
        })
    }
}

use std::sync::{Arc, Mutex};

use article_pulse::{DurationLookup, Error};

#[derive(Clone)]
pub struct MockDurationLookup {
    pub token: String,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<&'static str>,
}

impl MockDurationLookup {
    pub fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &'static str) -> Self {
        Self {
            token: String::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg),
        }
    }
}

impl DurationLookup for MockDurationLookup {
    const ENDPOINT: &'static str = "http://mock.local/videos";

    async fn video_duration(&self, video_id: &str) -> Result<String, Error> {
        self.calls.lock().unwrap().push(video_id.to_string());
        if let Some(msg) = self.fail_with {
            return Err(Error::UpstreamShape(msg));
        }
        Ok(self.token.clone())
    }
}

use std::sync::{Arc, Mutex};

use article_pulse::{EmbedLookup, Error};

#[derive(Clone)]
pub struct MockEmbedLookup {
    pub author_url: Option<String>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockEmbedLookup {
    pub fn new(author_url: Option<&str>) -> Self {
        Self {
            author_url: author_url.map(str::to_string),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl EmbedLookup for MockEmbedLookup {
    const ENDPOINT: &'static str = "http://mock.local/embed";

    async fn author_url(&self, video_url: &str) -> Result<Option<String>, Error> {
        self.calls.lock().unwrap().push(video_url.to_string());
        Ok(self.author_url.clone())
    }
}

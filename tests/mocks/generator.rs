use std::sync::{Arc, Mutex};

use article_pulse::{ArticleGenerator, Error};

#[derive(Clone)]
pub struct MockGenerator {
    pub raw_response: String,
    pub calls: Arc<Mutex<Vec<(String, Option<String>)>>>,
    pub fail_with: Option<(u16, String)>,
}

impl MockGenerator {
    pub fn new(raw_response: &str) -> Self {
        Self {
            raw_response: raw_response.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            raw_response: String::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some((status, message.to_string())),
        }
    }
}

impl ArticleGenerator for MockGenerator {
    const ENDPOINT: &'static str = "http://mock.local/chat";
    const MAX_TOKENS: u32 = 1024;

    async fn generate_article(
        &self,
        transcript: &str,
        author_url: Option<&str>,
    ) -> Result<String, Error> {
        self.calls
            .lock()
            .unwrap()
            .push((transcript.to_string(), author_url.map(str::to_string)));
        if let Some((status, ref message)) = self.fail_with {
            return Err(Error::Generation {
                status,
                message: message.clone(),
            });
        }
        Ok(self.raw_response.clone())
    }
}

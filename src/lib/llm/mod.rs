pub mod blackbox;

use std::future::Future;

use crate::error::Error;

/// Turns a transcript (and optional author profile URL) into article prose
/// via a chat-completion endpoint.
pub trait ArticleGenerator {
    const ENDPOINT: &str;
    const MAX_TOKENS: u32;

    fn generate_article(
        &self,
        transcript: &str,
        author_url: Option<&str>,
    ) -> impl Future<Output = Result<String, Error>> + Send;
}

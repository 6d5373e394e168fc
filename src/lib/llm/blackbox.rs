use std::{ops::Deref, time::Duration};

use crate::{
    error::Error,
    llm::ArticleGenerator,
    yt::{ACCEPT_LANGUAGE, BROWSER_USER_AGENT},
};

/// Client for the blackbox.ai chat endpoint.
///
/// The request body carries a fixed session shape the endpoint expects:
/// chat id, validation token, and all creative-mode flags disabled. Only
/// this outbound call has an explicit timeout.
#[derive(Default)]
pub struct BlackboxClient(pub reqwest::Client);

impl Deref for BlackboxClient {
    type Target = reqwest::Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl BlackboxClient {
    const CHAT_ID: &str = "EDDwgrS";
    const VALIDATED_TOKEN: &str = "00f37b34-a166-4efb-bce5-1312d87f2f94";
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    fn build_prompt(transcript: &str, author_url: Option<&str>) -> String {
        let author_context = author_url
            .map(|url| format!("along with the user profile URL: {url}. "))
            .unwrap_or_default();

        format!(
            "The following is the transcript of a YouTube video, {author_context}\
             Please use this information to craft a well-structured and engaging article.\n\n\
             {transcript}"
        )
    }
}

impl ArticleGenerator for BlackboxClient {
    const ENDPOINT: &str = "https://blackbox.ai/api/chat";
    const MAX_TOKENS: u32 = 1024;

    async fn generate_article(
        &self,
        transcript: &str,
        author_url: Option<&str>,
    ) -> Result<String, Error> {
        let body = serde_json::json!({
            "messages": [
                {
                    "id": Self::CHAT_ID,
                    "content": Self::build_prompt(transcript, author_url),
                    "role": "user"
                }
            ],
            "id": Self::CHAT_ID,
            "previewToken": null,
            "userId": null,
            "codeModelMode": true,
            "agentMode": {},
            "trendingAgentMode": {},
            "isMicMode": false,
            "userSystemPrompt": null,
            "maxTokens": Self::MAX_TOKENS,
            "playgroundTopP": 0.9,
            "playgroundTemperature": 0.5,
            "isChromeExt": false,
            "githubToken": "",
            "validated": Self::VALIDATED_TOKEN,
            "imageGenerationMode": false,
            "webSearchModePrompt": false
        });

        let response = self
            .post(Self::ENDPOINT)
            .timeout(Self::REQUEST_TIMEOUT)
            .header("Accept", "*/*")
            .header("Accept-Language", ACCEPT_LANGUAGE)
            .header("Origin", "https://www.blackbox.ai")
            .header("Referer", "https://www.blackbox.ai/")
            .header("User-Agent", BROWSER_USER_AGENT)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to reach generation endpoint"))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Generation { status, message });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_author_url_when_present() {
        let prompt =
            BlackboxClient::build_prompt("transcript text", Some("https://youtube.com/@creator"));
        assert!(prompt.contains("user profile URL: https://youtube.com/@creator. "));
        assert!(prompt.ends_with("transcript text"));
    }

    #[test]
    fn test_prompt_without_author_url() {
        let prompt = BlackboxClient::build_prompt("transcript text", None);
        assert!(!prompt.contains("user profile URL"));
        assert!(prompt.starts_with("The following is the transcript of a YouTube video, Please"));
    }
}

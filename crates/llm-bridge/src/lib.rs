//! Chat-completion client
//!
//! Talks to any OpenAI-compatible `/chat/completions` endpoint. Each
//! generation request sends one system prompt (the rewriting
//! instructions plus the template text) and one user prompt (the Q/A
//! transcript). Timeouts and non-2xx responses are terminal for that
//! request; there is no retry.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_MODEL: &str = "gpt-5";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Completion-side errors
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Missing configuration: {0}")]
    Config(String),

    #[error("Completion request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Completion API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Completion response contained no choices")]
    EmptyResponse,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Client for the completion service.
pub struct CompletionClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl CompletionClient {
    /// Build a client from environment variables: `LLM_API_KEY` and
    /// `LLM_BASE_URL` are required, `LLM_MODEL` and `LLM_TIMEOUT_SECS`
    /// have defaults.
    pub fn from_env() -> Result<Self, LlmError> {
        let api_key = std::env::var("LLM_API_KEY")
            .map_err(|_| LlmError::Config("LLM_API_KEY is not set".to_string()))?;
        let base_url = std::env::var("LLM_BASE_URL")
            .map_err(|_| LlmError::Config("LLM_BASE_URL is not set".to_string()))?;
        let model = std::env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let timeout = std::env::var("LLM_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self::new(base_url, api_key, model, Duration::from_secs(timeout))
    }

    /// Build a client with explicit settings.
    pub fn new(
        base_url: String,
        api_key: String,
        model: String,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.trim().to_string(),
            model,
        })
    }

    /// Request one completion and return the first choice's content.
    pub async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError> {
        let body = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: user.to_string(),
                },
            ],
        };

        let url = format!("{}/chat/completions", self.base_url);
        tracing::debug!(model = %self.model, "requesting completion");

        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(LlmError::Api { status, body });
        }

        let parsed: ChatResponse = res.json().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(LlmError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_request_body_shape() {
        let body = ChatRequest {
            model: "gpt-5".to_string(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "instructions".to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: "Q: Frequency\nA: Daily\n\n".to_string(),
                },
            ],
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "gpt-5");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
    }

    #[test]
    fn test_response_parsing_takes_first_choice() {
        let parsed: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"Control Name\nDaily review"}}]}"#,
        )
        .unwrap();
        assert_eq!(
            parsed.choices[0].message.content,
            "Control Name\nDaily review"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let client = CompletionClient::new(
            "https://api.example.com/v1/".to_string(),
            "key".to_string(),
            "gpt-5".to_string(),
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(client.base_url, "https://api.example.com/v1");
    }
}

//! LLM client: the text-completion backend for summary and description generation.
//!
//! No other module calls the Anthropic API directly. The credential is never
//! stored here; every call receives it explicitly from the host.
//!
//! Model: claude-sonnet-4-5 (hardcoded to prevent drift)
use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 1024;
const MAX_RETRIES: u32 = 3;
const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// A user-supplied API credential. Redacted in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Returns `None` for a blank key.
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        (!key.trim().is_empty()).then(|| Self(key.trim().to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// `complete(system, prompt) -> text` against some model backend.
#[async_trait]
pub trait TextCompletion: Send + Sync {
    async fn complete(&self, credential: &ApiKey, system: &str, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Messages API response; only the fields this crate reads.
#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// First `text` block, if any.
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// Outcome of one HTTP attempt.
enum Attempt {
    Done(LlmResponse),
    /// Transient failure (network, 429, 5xx); worth another try.
    Retry(LlmError),
}

/// Messages API client. Holds no credential of its own.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
}

impl LlmClient {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
        }
    }

    /// Sends one message, retrying transient failures with exponential backoff
    /// (1s, then 2s). Non-retryable API errors return immediately.
    pub async fn call(&self, credential: &ApiKey, prompt: &str, system: &str) -> Result<LlmResponse, LlmError> {
        let body = AnthropicRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system,
            messages: vec![AnthropicMessage {
                role: "user",
                content: prompt,
            }],
        };

        let mut last_error = None;
        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                let delay = Duration::from_millis(1000 << (attempt - 1));
                warn!(attempt, delay_ms = delay.as_millis() as u64, "retrying completion request");
                tokio::time::sleep(delay).await;
            }
            match self.attempt(credential, &body).await? {
                Attempt::Done(response) => return Ok(response),
                Attempt::Retry(e) => last_error = Some(e),
            }
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }

    async fn attempt(&self, credential: &ApiKey, body: &AnthropicRequest<'_>) -> Result<Attempt, LlmError> {
        let response = match self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", credential.expose())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(body)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => return Ok(Attempt::Retry(LlmError::Http(e))),
        };

        let status = response.status();
        if status.is_success() {
            let parsed: LlmResponse = response.json().await?;
            debug!(
                input_tokens = parsed.usage.input_tokens,
                output_tokens = parsed.usage.output_tokens,
                "completion succeeded"
            );
            return Ok(Attempt::Done(parsed));
        }

        let text = response.text().await.unwrap_or_default();
        let error = LlmError::Api {
            status: status.as_u16(),
            message: parse_error_message(&text),
        };
        if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
            warn!(status = status.as_u16(), "completion request failed transiently");
            Ok(Attempt::Retry(error))
        } else {
            Err(error)
        }
    }
}

impl Default for LlmClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextCompletion for LlmClient {
    async fn complete(&self, credential: &ApiKey, system: &str, prompt: &str) -> Result<String, LlmError> {
        let response = self.call(credential, prompt, system).await?;
        response
            .text()
            .filter(|t| !t.trim().is_empty())
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }
}

/// Pulls `error.message` out of an API error body, or returns the body as-is.
fn parse_error_message(body: &str) -> String {
    serde_json::from_str::<AnthropicError>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_rejects_blank() {
        assert!(ApiKey::new("").is_none());
        assert!(ApiKey::new("   ").is_none());
        assert_eq!(ApiKey::new(" sk-test ").unwrap().expose(), "sk-test");
    }

    #[test]
    fn test_api_key_debug_is_redacted() {
        let key = ApiKey::new("sk-secret").unwrap();
        assert_eq!(format!("{key:?}"), "ApiKey(***)");
    }

    #[test]
    fn test_response_text_picks_first_text_block() {
        let response: LlmResponse = serde_json::from_str(
            r#"{"content":[{"type":"tool_use"},{"type":"text","text":"Hello"}],
                "usage":{"input_tokens":3,"output_tokens":1}}"#,
        )
        .unwrap();
        assert_eq!(response.text(), Some("Hello"));
    }

    #[test]
    fn test_parse_error_message_from_json() {
        let body = r#"{"type":"error","error":{"type":"authentication_error","message":"invalid x-api-key"}}"#;
        assert_eq!(parse_error_message(body), "invalid x-api-key");
        assert_eq!(parse_error_message("plain text"), "plain text");
    }
}

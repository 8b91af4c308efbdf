//! Completion API client.
//!
//! Encapsulates the outbound call to the Groq chat-completion endpoint
//! (OpenAI-compatible wire format) together with the bounded retry policy.

use std::sync::LazyLock;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::config::AppConfig;
use crate::errors::ServiceError;

/// Total attempts per dispatch; a 429 consumes an attempt like any other
/// failure.
pub const MAX_ATTEMPTS: u32 = 3;
/// Base for the exponential rate-limit backoff: 1s, 2s, 4s.
const RATE_LIMIT_BASE_MS: u64 = 1000;
/// Fixed delay between attempts for non-rate-limit failures.
const RETRY_DELAY: Duration = Duration::from_secs(1);

const MAX_TOKENS: u32 = 200;
const TEMPERATURE: f32 = 0.3;

// No request timeout beyond the retry/backoff bound is enforced on the
// external call; known limitation.
static HTTP_CLIENT: LazyLock<Client> = LazyLock::new(Client::new);

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

impl ChatCompletionResponse {
    /// Text of the first choice, or the empty string when the reply carries
    /// no choices. Mirrors how the extractor treats an empty reply: defaults,
    /// not errors.
    #[must_use]
    pub fn into_text(self) -> String {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .unwrap_or_default()
    }
}

/// Completion API client with retry logic. Holds the credential it was
/// constructed with; one instance is shared read-only across requests.
pub struct CompletionClient {
    api_key: String,
    api_url: String,
    model: String,
}

impl CompletionClient {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            api_key: config.groq_api_key.clone(),
            api_url: config.groq_api_url.clone(),
            model: config.model.clone(),
        }
    }

    /// Send `prompt` to the completion API and return the first successful
    /// response body. Retries transient failures up to [`MAX_ATTEMPTS`]:
    /// HTTP 429 waits `2^attempt` seconds, anything else waits a fixed 1s.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::CompletionApi`] for a non-2xx final attempt
    /// and [`ServiceError::HttpError`] for a network-level final failure.
    pub async fn complete(&self, prompt: &str) -> Result<ChatCompletionResponse, ServiceError> {
        let mut last_error = ServiceError::CompletionApi("no attempts made".to_string());

        for attempt in 0..MAX_ATTEMPTS {
            let request = ChatCompletionRequest {
                model: self.model.clone(),
                messages: vec![ChatMessage {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                }],
                max_tokens: MAX_TOKENS,
                temperature: TEMPERATURE,
            };

            let response = HTTP_CLIENT
                .post(&self.api_url)
                .bearer_auth(&self.api_key)
                .json(&request)
                .send()
                .await;

            match response {
                Ok(response) if response.status() == StatusCode::TOO_MANY_REQUESTS => {
                    let wait = Duration::from_millis(RATE_LIMIT_BASE_MS << attempt);
                    warn!(attempt, wait_ms = wait.as_millis() as u64, "Rate limited by completion API");
                    last_error = ServiceError::RateLimited;
                    if attempt + 1 < MAX_ATTEMPTS {
                        tokio::time::sleep(wait).await;
                    }
                }
                Ok(response) if !response.status().is_success() => {
                    let status = response.status();
                    let body = response.text().await.unwrap_or_else(|e| {
                        format!("failed to read error response body: {e}")
                    });
                    warn!(attempt, %status, error_body = %body, "Completion API error response");
                    last_error = ServiceError::CompletionApi(format!("status {status}: {body}"));
                    if attempt + 1 < MAX_ATTEMPTS {
                        tokio::time::sleep(RETRY_DELAY).await;
                    }
                }
                Ok(response) => {
                    return response.json::<ChatCompletionResponse>().await.map_err(|e| {
                        ServiceError::CompletionApi(format!("failed to parse response: {e}"))
                    });
                }
                Err(e) => {
                    warn!(attempt, error = %e, "Completion API request failed");
                    last_error = ServiceError::HttpError(e.to_string());
                    if attempt + 1 < MAX_ATTEMPTS {
                        tokio::time::sleep(RETRY_DELAY).await;
                    }
                }
            }
        }

        Err(last_error)
    }
}

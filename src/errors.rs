use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Completion API rate limited (HTTP 429)")]
    RateLimited,

    #[error("Completion API error: {0}")]
    CompletionApi(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl From<reqwest::Error> for ServiceError {
    fn from(error: reqwest::Error) -> Self {
        ServiceError::HttpError(error.to_string())
    }
}

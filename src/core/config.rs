use std::env;

pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Service configuration, loaded once at startup and read-only thereafter.
///
/// The API key is deliberately excluded from the `Debug` output and must
/// never be logged.
#[derive(Clone)]
pub struct AppConfig {
    pub groq_api_key: String,
    pub groq_api_url: String,
    pub model: String,
    pub port: u16,
    pub public_dir: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("groq_api_key", &"***")
            .field("groq_api_url", &self.groq_api_url)
            .field("model", &self.model)
            .field("port", &self.port)
            .field("public_dir", &self.public_dir)
            .finish()
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|e| format!("PORT: {e}"))?,
            Err(_) => 3000,
        };

        Ok(Self {
            groq_api_key: env::var("GROQ_API_KEY").map_err(|e| format!("GROQ_API_KEY: {e}"))?,
            groq_api_url: env::var("GROQ_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            model: env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            port,
            public_dir: env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".to_string()),
        })
    }
}

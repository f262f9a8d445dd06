use std::env;

pub const API_KEY_PLACEHOLDER: &str = "your-api-key-here";

#[derive(Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub openai_model: String,
    pub port: u16,
    pub llm_timeout_secs: u64,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from the environment. A missing or placeholder
    /// OPENAI_API_KEY is a startup-blocking error.
    pub fn from_env() -> Result<Self, String> {
        let openai_api_key =
            env::var("OPENAI_API_KEY").map_err(|_| "OPENAI_API_KEY is not set".to_string())?;

        if openai_api_key.trim().is_empty() || openai_api_key == API_KEY_PLACEHOLDER {
            return Err("OPENAI_API_KEY is empty or still the placeholder value".to_string());
        }

        Ok(Self {
            openai_api_key,
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            llm_timeout_secs: env::var("LLM_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(30),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_else(Vec::new),
        })
    }
}

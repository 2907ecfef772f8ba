use crate::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_APP_URL: &str = "http://localhost:8080";
const DEFAULT_ANTHROPIC_MODEL: &str = "claude-sonnet-4-20250514";

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub app_url: String,

    pub anthropic_api_key: String,
    pub anthropic_model: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            app_url: std::env::var("APP_URL").unwrap_or_else(|_| DEFAULT_APP_URL.to_string()),
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY")
                .map_err(|_| ConfigError::MissingEnvVar("ANTHROPIC_API_KEY".to_string()))?,
            anthropic_model: std::env::var("ANTHROPIC_MODEL")
                .unwrap_or_else(|_| DEFAULT_ANTHROPIC_MODEL.to_string()),
        })
    }
}

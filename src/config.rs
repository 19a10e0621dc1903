use crate::error::{config::ConfigError, AppError};

const DEFAULT_IDENTITY_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub store_base_url: String,

    pub identity_base_url: String,
    pub identity_api_key: String,

    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            store_base_url: std::env::var("STORE_BASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("STORE_BASE_URL".to_string()))?,
            identity_base_url: std::env::var("IDENTITY_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_IDENTITY_BASE_URL.to_string()),
            identity_api_key: std::env::var("FIREBASE_API_KEY")
                .map_err(|_| ConfigError::MissingEnvVar("FIREBASE_API_KEY".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
        })
    }
}

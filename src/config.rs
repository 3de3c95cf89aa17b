use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::error::{ApiError, ApiResult};

#[derive(Clone)]
pub struct Config {
    pub api_base_url: String,
    pub api_token: Option<String>,
    pub request_timeout_secs: u64,
    pub session_store_path: PathBuf,
    /// Front-end origin, used for payment return/cancel URLs
    pub app_base_url: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_base_url", &self.api_base_url)
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("session_store_path", &self.session_store_path)
            .field("app_base_url", &self.app_base_url)
            .finish()
    }
}

impl Config {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            api_token: None,
            request_timeout_secs: 30,
            session_store_path: PathBuf::from(".bus-booking/session.json"),
            app_base_url: "http://localhost:5173".to_string(),
        }
    }

    pub fn from_env() -> ApiResult<Self> {
        dotenvy::dotenv().ok();

        let api_base_url = env::var("API_BASE_URL")
            .map_err(|_| ApiError::Config("API_BASE_URL must be set".to_string()))?;

        let mut config = Self::new(api_base_url);

        config.api_token = env::var("API_TOKEN").ok().filter(|t| !t.is_empty());

        if let Ok(timeout) = env::var("REQUEST_TIMEOUT_SECS") {
            config.request_timeout_secs = timeout.parse().map_err(|_| {
                ApiError::Config("REQUEST_TIMEOUT_SECS must be a number".to_string())
            })?;
        }

        if let Ok(path) = env::var("SESSION_STORE_PATH") {
            config.session_store_path = PathBuf::from(path);
        }

        if let Ok(origin) = env::var("APP_BASE_URL") {
            config.app_base_url = origin;
        }

        Ok(config)
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    pub fn with_app_base_url(mut self, origin: impl Into<String>) -> Self {
        self.app_base_url = origin.into();
        self
    }
}

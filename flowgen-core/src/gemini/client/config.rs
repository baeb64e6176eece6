use crate::config::GeminiConfig;
use crate::config::constants::{defaults, urls};
use std::time::Duration;

/// HTTP client settings for the Gemini API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base, e.g. `https://generativelanguage.googleapis.com/v1beta`
    pub base_url: String,
    /// Whole-request timeout; `None` waits for the remote side indefinitely
    pub request_timeout: Option<Duration>,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: urls::GEMINI_API_BASE.to_string(),
            request_timeout: None,
            connect_timeout: Duration::from_secs(defaults::DEFAULT_CONNECT_TIMEOUT_SECS),
            user_agent: defaults::DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl From<&GeminiConfig> for ClientConfig {
    fn from(config: &GeminiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            request_timeout: config.request_timeout(),
            connect_timeout: config.connect_timeout(),
            user_agent: config.user_agent.clone(),
        }
    }
}

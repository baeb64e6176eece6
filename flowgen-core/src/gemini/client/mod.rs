pub mod config;

pub use config::ClientConfig;

use crate::gemini::models::{ApiErrorResponse, GenerateContentRequest, GenerateContentResponse};
use crate::llm::LLMError;
use anyhow::{Context, Result};
use reqwest::{Client as ReqwestClient, StatusCode};
use tracing::debug;

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Clone)]
pub struct Client {
    api_key: String,
    model: String,
    http: ReqwestClient,
    config: ClientConfig,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("config", &self.config)
            .finish()
    }
}

impl Client {
    /// Create a client with custom configuration
    pub fn with_config(api_key: String, model: String, config: ClientConfig) -> Result<Self> {
        let mut builder = ReqwestClient::builder()
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            api_key,
            model,
            http,
            config,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// `generateContent` URL for the configured model. Accepts model names
    /// with or without the `models/` prefix.
    pub fn endpoint(&self) -> String {
        let model = self.model.strip_prefix("models/").unwrap_or(&self.model);
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        )
    }

    /// POST to [`Self::endpoint`] with the key in the `x-goog-api-key` header
    pub fn build_request(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<reqwest::Request, LLMError> {
        self.http
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .json(request)
            .build()
            .map_err(transport_error)
    }

    /// Generate content with the Gemini API. Single attempt, no retry.
    pub async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, LLMError> {
        debug!(model = %self.model, "Sending generateContent request");
        let response = self
            .http
            .execute(self.build_request(request)?)
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(map_api_error(status, &error_text));
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| {
                LLMError::InvalidResponse(format!("Failed to parse response: {}", e.without_url()))
            })
    }
}

fn transport_error(error: reqwest::Error) -> LLMError {
    let timed_out = error.is_timeout();
    let message = error_chain(&error.without_url());
    if timed_out {
        LLMError::Network(format!("request timed out: {message}"))
    } else {
        LLMError::Network(message)
    }
}

/// Display of `error` followed by each `source()`, joined with ": "
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// Map a non-success HTTP response into a typed error.
///
/// Uses the HTTP status, the body's canonical `status` and any
/// `ErrorInfo.reason` entries. The remote message is kept verbatim.
pub fn map_api_error(status: StatusCode, body: &str) -> LLMError {
    let parsed = serde_json::from_str::<ApiErrorResponse>(body).ok();
    let message = parsed
        .as_ref()
        .map(|p| p.error.message.as_str())
        .filter(|m| !m.is_empty())
        .unwrap_or(body);
    let detail = format!("HTTP {status}: {message}");

    let canonical = parsed.as_ref().map(|p| p.error.status.as_str()).unwrap_or("");
    let key_rejected = parsed.as_ref().is_some_and(|p| {
        p.error.has_reason("API_KEY_INVALID") || p.error.has_reason("API_KEY_SERVICE_BLOCKED")
    });

    if key_rejected
        || matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
        || matches!(canonical, "UNAUTHENTICATED" | "PERMISSION_DENIED")
    {
        LLMError::Authentication(detail)
    } else if status == StatusCode::NOT_FOUND || canonical == "NOT_FOUND" {
        LLMError::ModelNotFound(detail)
    } else if status == StatusCode::TOO_MANY_REQUESTS || canonical == "RESOURCE_EXHAUSTED" {
        LLMError::RateLimit(detail)
    } else {
        LLMError::Provider(detail)
    }
}

//! Provider abstraction for text generation
//!
//! The generator only needs "prompt in, text out". Keeping that behind a
//! trait lets the HTTP client be swapped for an in-process stub in tests.

use async_trait::async_trait;
use thiserror::Error;

/// Errors reported by a text generation backend.
///
/// Variants are chosen from structured data (HTTP status, error status,
/// `ErrorInfo` reasons) wherever the provider exposes it. The message keeps
/// the provider's own wording so it can be surfaced to the user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LLMError {
    #[error("Model not found: {0}")]
    ModelNotFound(String),
    #[error("Authentication failed: {0}")]
    Authentication(String),
    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Provider error: {0}")]
    Provider(String),
    #[error("Empty response: {0}")]
    EmptyResponse(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// A backend that turns a prompt into generated text
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Provider name used in logs
    fn name(&self) -> &str;

    /// Model identifier requests are sent to
    fn model(&self) -> &str;

    /// Send `prompt` as a single request and return the reply text
    async fn generate_text(&self, prompt: &str) -> Result<String, LLMError>;
}

use crate::config::constants::models;
use crate::llm::LLMError;
use thiserror::Error;

/// Fatal errors of a generation run.
///
/// Each variant renders with its own prefix so callers can tell the causes
/// apart from the message alone. Saving the file never produces one of these.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Model not available. Try using {}. Error: {}", suggested_models(), .message)]
    ModelUnavailable { message: String },

    #[error("Invalid API key. Please check your Gemini API key. Error: {message}")]
    InvalidCredential { message: String },

    #[error(
        "Failed to parse AI response as JSON. The AI might have returned invalid JSON. Error: {source}"
    )]
    MalformedOutput {
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to generate workflow. Error: {message}")]
    Failed { message: String },
}

fn suggested_models() -> String {
    models::google::SUPPORTED_MODELS
        .iter()
        .map(|m| format!("'{m}'"))
        .collect::<Vec<_>>()
        .join(" or ")
}

impl GenerateError {
    /// Short, stable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ModelUnavailable { .. } => "model-unavailable",
            Self::InvalidCredential { .. } => "invalid-credential",
            Self::MalformedOutput { .. } => "malformed-output",
            Self::Failed { .. } => "generic-failure",
        }
    }
}

impl From<LLMError> for GenerateError {
    /// Typed variants decide first. For everything else the message is
    /// matched against `models/` and then `API key`; that fallback is
    /// best-effort since it depends on the provider's wording.
    fn from(error: LLMError) -> Self {
        let message = error.to_string();
        match error {
            LLMError::ModelNotFound(_) => Self::ModelUnavailable { message },
            LLMError::Authentication(_) => Self::InvalidCredential { message },
            _ => classify_message(message),
        }
    }
}

/// Classify an untyped upstream error by its text
pub fn classify_message(message: String) -> GenerateError {
    if message.contains("models/") {
        GenerateError::ModelUnavailable { message }
    } else if message.contains("API key") {
        GenerateError::InvalidCredential { message }
    } else {
        GenerateError::Failed { message }
    }
}

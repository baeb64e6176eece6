use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error envelope returned by the Gemini API on non-2xx responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    /// Canonical status such as `NOT_FOUND` or `INVALID_ARGUMENT`
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub details: Vec<Value>,
}

impl ApiErrorBody {
    /// `reason` values of any `google.rpc.ErrorInfo` entries in `details`
    pub fn reasons(&self) -> impl Iterator<Item = &str> {
        self.details
            .iter()
            .filter_map(|detail| detail.get("reason").and_then(Value::as_str))
    }

    pub fn has_reason(&self, reason: &str) -> bool {
        self.reasons().any(|r| r == reason)
    }
}

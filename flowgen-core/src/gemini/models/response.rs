use super::Content;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default, rename = "promptFeedback")]
    pub prompt_feedback: Option<PromptFeedback>,
    #[serde(default, rename = "usageMetadata")]
    pub usage_metadata: Option<Value>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, or `None` when the response
    /// carries no candidate.
    pub fn text(&self) -> Option<String> {
        self.candidates.first().map(|candidate| {
            candidate
                .content
                .parts
                .iter()
                .filter_map(|part| part.as_text())
                .collect::<String>()
        })
    }

    pub fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Content,
    #[serde(default, rename = "finishReason")]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptFeedback {
    #[serde(default, rename = "blockReason")]
    pub block_reason: Option<String>,
}

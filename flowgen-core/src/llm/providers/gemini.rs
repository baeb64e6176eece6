use crate::config::{GeminiConfig, GeneratorConfig};
use crate::gemini::{Client, ClientConfig, GenerateContentRequest, GenerateContentResponse};
use crate::llm::provider::{LLMError, TextGenerator};
use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

/// [`TextGenerator`] backed by Gemini `generateContent`
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    client: Client,
}

impl GeminiProvider {
    pub fn from_config(
        api_key: String,
        generator: &GeneratorConfig,
        gemini: &GeminiConfig,
    ) -> Result<Self> {
        let client =
            Client::with_config(api_key, generator.model.clone(), ClientConfig::from(gemini))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl TextGenerator for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        self.client.model()
    }

    async fn generate_text(&self, prompt: &str) -> Result<String, LLMError> {
        let request = GenerateContentRequest::from_prompt(prompt);
        let response = self.client.generate(&request).await?;

        if let Some(usage) = &response.usage_metadata {
            debug!(usage = %usage, "Gemini usage");
        }

        reply_text(&response)
    }
}

/// Text of the first candidate; a response without one carries the block
/// reason when Gemini gave it.
fn reply_text(response: &GenerateContentResponse) -> Result<String, LLMError> {
    response.text().ok_or_else(|| match response.block_reason() {
        Some(reason) => LLMError::EmptyResponse(format!("prompt was blocked ({reason})")),
        None => LLMError::EmptyResponse("no candidates returned".to_string()),
    })
}

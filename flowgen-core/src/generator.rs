//! Natural-language request → n8n workflow JSON → file on disk.
//!
//! One call to [`WorkflowGenerator::generate`] runs five steps in order:
//! compose the prompt, call the model once, strip fences and parse, save the
//! graph, and build the [`GenerationRecord`]. Only the model call and the
//! parse can fail the run; saving problems are reported inside the record.

use crate::config::{ApiKeySources, FlowgenConfig, get_api_key, load_dotenv};
use crate::error::GenerateError;
use crate::llm::{GeminiProvider, TextGenerator};
use crate::prompts::compose_workflow_prompt;
use crate::workflow::{GenerationRecord, WorkflowStore, WorkflowSummary, parse_model_output};
use std::path::Path;
use tracing::{error, info, warn};

pub struct WorkflowGenerator {
    provider: Box<dyn TextGenerator>,
    store: WorkflowStore,
}

impl WorkflowGenerator {
    pub fn new(provider: Box<dyn TextGenerator>, store: WorkflowStore) -> Self {
        Self { provider, store }
    }

    /// Gemini-backed generator. The API key is resolved now, from the
    /// environment first, then `<workspace>/.env`, then the config file.
    pub fn from_config(config: &FlowgenConfig, workspace: &Path) -> anyhow::Result<Self> {
        let sources = ApiKeySources::new(
            config.generator.api_key_env.clone(),
            config.generator.api_key.clone(),
        )
        .with_dotenv(load_dotenv(workspace));
        let api_key = get_api_key(&sources)?;
        let provider = GeminiProvider::from_config(api_key, &config.generator, &config.gemini)?;
        let store = WorkflowStore::new(config.generator.resolved_output_dir());
        Ok(Self::new(Box::new(provider), store))
    }

    pub fn output_dir(&self) -> &Path {
        self.store.output_dir()
    }

    pub fn model(&self) -> &str {
        self.provider.model()
    }

    pub async fn generate(&self, prompt: &str) -> Result<GenerationRecord, GenerateError> {
        let composed = compose_workflow_prompt(prompt);

        let reply = self
            .provider
            .generate_text(&composed)
            .await
            .map_err(|e| {
                error!(
                    provider = self.provider.name(),
                    model = self.provider.model(),
                    "Generation request failed: {e}"
                );
                GenerateError::from(e)
            })?;

        let workflow = parse_model_output(&reply).map_err(|source| {
            error!("Model reply is not valid JSON: {source}");
            GenerateError::MalformedOutput { source }
        })?;

        let summary = WorkflowSummary::of(&workflow);
        info!(
            nodes = summary.node_count,
            connections = summary.connection_count,
            "Generated workflow"
        );
        if !summary.starts_with_trigger() {
            warn!(
                first_node = summary.first_node_type.as_deref().unwrap_or("<none>"),
                "Generated workflow does not start with a trigger node"
            );
        }

        let outcome = self.store.save(&workflow).await;
        Ok(GenerationRecord::new(prompt, workflow, outcome))
    }
}

impl std::fmt::Debug for WorkflowGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkflowGenerator")
            .field("provider", &self.provider.name())
            .field("model", &self.provider.model())
            .field("store", &self.store)
            .finish()
    }
}

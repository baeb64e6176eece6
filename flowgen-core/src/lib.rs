//! # flowgen-core
//!
//! Turns a plain-text description into an n8n workflow by asking Gemini for
//! the workflow JSON, then writes the result to disk.
//!
//! - `config/`: `flowgen.toml` loading, API key resolution, constants.
//! - `gemini/`: HTTP client and wire types for `generateContent`.
//! - `llm/`: the [`TextGenerator`] seam and its Gemini implementation.
//! - `prompts/`: the instruction envelope sent to the model.
//! - `workflow/`: fence stripping, file persistence, result records.
//! - [`generator`]: the end-to-end operation.
//! - [`node`]: host node description and execute entry point.
//!
//! ```rust,ignore
//! use flowgen_core::{ConfigManager, WorkflowGenerator};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let workspace = std::env::current_dir()?;
//!     let config = ConfigManager::load_from_workspace(&workspace)?.into_config();
//!     let generator = WorkflowGenerator::from_config(&config, &workspace)?;
//!     let record = generator
//!         .generate("When a webhook is called, send \"Hello World\" to Slack.")
//!         .await?;
//!     println!("{}", record.saved_to_path.display());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod gemini;
pub mod generator;
pub mod llm;
pub mod node;
pub mod prompts;
pub mod workflow;

pub use config::{ConfigManager, FlowgenConfig};
pub use error::GenerateError;
pub use generator::WorkflowGenerator;
pub use llm::{LLMError, TextGenerator};
pub use node::{NodeDescription, WorkflowGeneratorNode};
pub use workflow::{ExecutionItem, GenerationRecord, OutputBatches, WorkflowStore, WorkflowSummary};

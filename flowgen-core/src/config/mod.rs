//! Configuration handling
//!
//! Loads `flowgen.toml`, resolves the Gemini API key and centralizes the
//! constants used across the crate.

pub mod api_keys;
pub mod constants;
pub mod loader;

pub use api_keys::{ApiKeySources, get_api_key, load_dotenv};
pub use loader::{ConfigManager, FlowgenConfig, GeminiConfig, GeneratorConfig, default_output_dir};

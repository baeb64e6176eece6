use crate::config::constants::{config_files, defaults, models, output, urls};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Generator settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneratorConfig {
    /// Gemini model used for generation
    #[serde(default = "default_model")]
    pub model: String,

    /// Directory for generated workflow files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// API key literal, consulted after the environment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

fn default_model() -> String {
    models::google::DEFAULT_MODEL.to_string()
}
fn default_api_key_env() -> String {
    defaults::DEFAULT_API_KEY_ENV.to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            output_dir: None,
            api_key_env: default_api_key_env(),
            api_key: None,
        }
    }
}

impl GeneratorConfig {
    /// Configured output directory, or the platform default
    pub fn resolved_output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(default_output_dir)
    }
}

/// Platform data directory for generated workflows, falling back to the
/// system temp directory when no data directory is known.
pub fn default_output_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(output::APP_DIR_NAME)
        .join(output::WORKFLOWS_DIR_NAME)
}

/// Gemini HTTP settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout. Unset means the request is awaited until the
    /// remote side answers or the connection fails.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    urls::GEMINI_API_BASE.to_string()
}
fn default_connect_timeout_secs() -> u64 {
    defaults::DEFAULT_CONNECT_TIMEOUT_SECS
}
fn default_user_agent() -> String {
    defaults::DEFAULT_USER_AGENT.to_string()
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: None,
            connect_timeout_secs: default_connect_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl GeminiConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

/// Main configuration structure, read from `flowgen.toml`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FlowgenConfig {
    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub gemini: GeminiConfig,
}

impl FlowgenConfig {
    /// Write a default configuration file to `output`
    pub fn create_sample_config<P: AsRef<Path>>(output: P) -> Result<()> {
        let output = output.as_ref();
        let config_content = toml::to_string_pretty(&FlowgenConfig::default())
            .context("Failed to serialize default configuration")?;

        fs::write(output, config_content)
            .with_context(|| format!("Failed to write config file: {}", output.display()))?;

        Ok(())
    }

    /// Create `flowgen.toml` in `workspace` unless it exists and `force` is
    /// false. Returns the path when a file was written.
    pub fn bootstrap_project<P: AsRef<Path>>(workspace: P, force: bool) -> Result<Option<PathBuf>> {
        let config_path = workspace.as_ref().join(config_files::CONFIG_FILE_NAME);
        if config_path.exists() && !force {
            return Ok(None);
        }
        Self::create_sample_config(&config_path)?;
        Ok(Some(config_path))
    }
}

/// Configuration manager for locating and loading `flowgen.toml`
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: FlowgenConfig,
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    fn get_home_dir() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            return Some(PathBuf::from(home));
        }
        if let Ok(userprofile) = std::env::var("USERPROFILE") {
            return Some(PathBuf::from(userprofile));
        }
        dirs::home_dir()
    }

    /// Search order: `<workspace>/flowgen.toml`,
    /// `<workspace>/.flowgen/flowgen.toml`, `~/.flowgen/flowgen.toml`.
    /// Falls back to defaults when none exists.
    pub fn load_from_workspace(workspace: impl AsRef<Path>) -> Result<Self> {
        let workspace = workspace.as_ref();

        let mut candidates = vec![
            workspace.join(config_files::CONFIG_FILE_NAME),
            workspace
                .join(config_files::CONFIG_DIR_NAME)
                .join(config_files::CONFIG_FILE_NAME),
        ];
        if let Some(home_dir) = Self::get_home_dir() {
            candidates.push(
                home_dir
                    .join(config_files::CONFIG_DIR_NAME)
                    .join(config_files::CONFIG_FILE_NAME),
            );
        }

        match candidates.into_iter().find(|path| path.exists()) {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self {
                config: FlowgenConfig::default(),
                config_path: None,
            }),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: FlowgenConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(Self {
            config,
            config_path: Some(path.to_path_buf()),
        })
    }

    pub fn config(&self) -> &FlowgenConfig {
        &self.config
    }

    pub fn into_config(self) -> FlowgenConfig {
        self.config
    }

    /// Get the configuration file path (if loaded from file)
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}

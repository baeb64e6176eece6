//! API key retrieval from environment variables, .env files and the
//! configuration file.
//!
//! Exported environment variables take priority over the workspace `.env`
//! file, which takes priority over `flowgen.toml`, so that secrets can stay
//! out of files that might be committed.

use crate::config::constants::{config_files, env};
use anyhow::{Result, bail};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// Where to look for the Gemini API key
#[derive(Clone, Default)]
pub struct ApiKeySources {
    /// Primary environment variable name
    pub env_var: String,
    /// Variables read from the workspace `.env` file
    pub dotenv: HashMap<String, String>,
    /// Value from the configuration file, if any
    pub config_value: Option<String>,
}

impl std::fmt::Debug for ApiKeySources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeySources")
            .field("env_var", &self.env_var)
            .field("dotenv", &self.dotenv.keys().collect::<Vec<_>>())
            .field(
                "config_value",
                &self.config_value.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

impl ApiKeySources {
    pub fn new(env_var: impl Into<String>, config_value: Option<String>) -> Self {
        Self {
            env_var: env_var.into(),
            dotenv: HashMap::new(),
            config_value,
        }
    }

    pub fn with_dotenv(mut self, dotenv: HashMap<String, String>) -> Self {
        self.dotenv = dotenv;
        self
    }
}

/// Read `<workspace>/.env` without touching the process environment.
///
/// A missing file yields no values; a malformed one is logged and skipped.
pub fn load_dotenv(workspace: &Path) -> HashMap<String, String> {
    let path = workspace.join(config_files::DOTENV_FILE_NAME);
    let iter = match dotenvy::from_path_iter(&path) {
        Ok(iter) => iter,
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            return HashMap::new();
        }
        Err(e) => {
            warn!("Failed to load {}: {e}", path.display());
            return HashMap::new();
        }
    };

    match iter.collect::<Result<HashMap<_, _>, _>>() {
        Ok(values) => {
            debug!("Loaded {} variables from {}", values.len(), path.display());
            values
        }
        Err(e) => {
            warn!("Failed to parse {}: {e}", path.display());
            HashMap::new()
        }
    }
}

/// Resolve the API key from the process environment, the `.env` values, then
/// the config file.
pub fn get_api_key(sources: &ApiKeySources) -> Result<String> {
    get_api_key_with(sources, |name| std::env::var(name).ok())
}

/// Resolve the API key using a custom process-environment lookup.
///
/// Order: exported `sources.env_var`, exported `GOOGLE_API_KEY`, the same two
/// names in `.env`, then the config value. Blank values are treated as unset.
pub fn get_api_key_with<F>(sources: &ApiKeySources, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let names = [sources.env_var.as_str(), env::GOOGLE_API_KEY];
    let names = names.iter().filter(|name| !name.is_empty());

    for name in names.clone() {
        if let Some(value) = lookup(name).filter(|v| !v.trim().is_empty()) {
            debug!("Using API key from ${name}");
            return Ok(value);
        }
    }

    for name in names {
        if let Some(value) = sources.dotenv.get(*name).filter(|v| !v.trim().is_empty()) {
            debug!("Using API key {name} from .env");
            return Ok(value.clone());
        }
    }

    if let Some(value) = sources
        .config_value
        .as_ref()
        .filter(|v| !v.trim().is_empty())
    {
        debug!("Using API key from configuration file");
        return Ok(value.clone());
    }

    bail!(
        "No Gemini API key found. Set {} or {} in your environment or the workspace .env file, or `api_key` under [generator] in flowgen.toml",
        sources.env_var,
        env::GOOGLE_API_KEY
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn dotenv(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn primary_env_var_wins() {
        let sources = ApiKeySources::new("GEMINI_API_KEY", Some("from-config".to_string()));
        let lookup = lookup_from(&[("GEMINI_API_KEY", "primary"), ("GOOGLE_API_KEY", "google")]);
        assert_eq!(get_api_key_with(&sources, lookup).unwrap(), "primary");
    }

    #[test]
    fn falls_back_to_google_api_key() {
        let sources = ApiKeySources::new("CUSTOM_KEY", None);
        let lookup = lookup_from(&[("GOOGLE_API_KEY", "google")]);
        assert_eq!(get_api_key_with(&sources, lookup).unwrap(), "google");
    }

    #[test]
    fn blank_env_values_fall_through_to_config() {
        let sources = ApiKeySources::new("GEMINI_API_KEY", Some("from-config".to_string()));
        let lookup = lookup_from(&[("GEMINI_API_KEY", "  ")]);
        assert_eq!(get_api_key_with(&sources, lookup).unwrap(), "from-config");
    }

    #[test]
    fn missing_key_names_the_variable() {
        let sources = ApiKeySources::new("GEMINI_API_KEY", None);
        let err = get_api_key_with(&sources, |_| None).unwrap_err();
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn exported_google_key_beats_dotenv_primary() {
        let sources = ApiKeySources::new("GEMINI_API_KEY", None)
            .with_dotenv(dotenv(&[("GEMINI_API_KEY", "from-dotenv")]));
        let lookup = lookup_from(&[("GOOGLE_API_KEY", "exported")]);
        assert_eq!(get_api_key_with(&sources, lookup).unwrap(), "exported");
    }

    #[test]
    fn dotenv_beats_config_value() {
        let sources = ApiKeySources::new("GEMINI_API_KEY", Some("from-config".to_string()))
            .with_dotenv(dotenv(&[("GOOGLE_API_KEY", "from-dotenv")]));
        assert_eq!(get_api_key_with(&sources, |_| None).unwrap(), "from-dotenv");
    }

    #[test]
    fn dotenv_is_read_from_the_workspace() {
        let workspace = TempDir::new().unwrap();
        std::fs::write(
            workspace.path().join(".env"),
            "GEMINI_API_KEY=workspace-key\n# comment\nFLOWGEN_DOTENV_ONLY=1\n",
        )
        .unwrap();

        let values = load_dotenv(workspace.path());
        assert_eq!(values.get("GEMINI_API_KEY").map(String::as_str), Some("workspace-key"));
        assert!(std::env::var("FLOWGEN_DOTENV_ONLY").is_err());

        let empty = TempDir::new().unwrap();
        assert!(load_dotenv(empty.path()).is_empty());
    }

    #[test]
    fn debug_output_redacts_secret_values() {
        let sources = ApiKeySources::new("GEMINI_API_KEY", Some("secret-value".to_string()))
            .with_dotenv(dotenv(&[("GEMINI_API_KEY", "dotenv-secret")]));
        let rendered = format!("{sources:?}");
        assert!(!rendered.contains("secret-value"));
        assert!(!rendered.contains("dotenv-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}

use crate::cli::Cli;
use anyhow::{Context, Result};
use flowgen_core::config::{ConfigManager, FlowgenConfig};
use std::path::PathBuf;
use tracing::debug;

/// Workspace the command runs against
pub fn resolve_workspace(cli: &Cli) -> Result<PathBuf> {
    match &cli.workspace {
        Some(path) => Ok(path.clone()),
        None => std::env::current_dir().context("cannot determine current dir"),
    }
}

/// Load flowgen.toml (explicit path or workspace lookup) and apply CLI overrides
pub fn load_effective_config(cli: &Cli) -> Result<FlowgenConfig> {
    let manager = match &cli.config {
        Some(path) => ConfigManager::load_from_file(path)?,
        None => ConfigManager::load_from_workspace(resolve_workspace(cli)?)?,
    };
    match manager.config_path() {
        Some(path) => debug!("Loaded configuration from {}", path.display()),
        None => debug!("No flowgen.toml found, using defaults"),
    }

    let mut config = manager.into_config();
    apply_overrides(cli, &mut config);
    Ok(config)
}

fn apply_overrides(cli: &Cli, config: &mut FlowgenConfig) {
    if let Some(model) = &cli.model {
        config.generator.model = model.clone();
    }
    if let Some(dir) = &cli.output_dir {
        config.generator.output_dir = Some(dir.clone());
    }
    if let Some(env_var) = &cli.api_key_env {
        config.generator.api_key_env = env_var.clone();
    }
}

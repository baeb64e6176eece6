//! flowgen - generate n8n workflows from plain-text descriptions

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.log_filter());

    match &args.command {
        Commands::Generate { prompt, items } => {
            let workspace = cli::resolve_workspace(&args)?;
            let config = cli::load_effective_config(&args)?;
            cli::handle_generate_command(&config, &workspace, prompt, *items).await
        }
        Commands::Describe => cli::handle_describe_command(),
        Commands::Init { force } => {
            let workspace = cli::resolve_workspace(&args)?;
            cli::handle_init_command(&workspace, *force)
        }
    }
}

/// Log to stderr; `RUST_LOG` takes precedence over the CLI flags
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

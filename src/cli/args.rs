//! CLI argument parsing

use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;

/// Main CLI structure for flowgen
#[derive(Parser, Debug)]
#[command(
    name = "flowgen",
    version,
    about = "Generate n8n workflows from plain-text descriptions with Gemini\n\nQuick Start:\n  export GEMINI_API_KEY=\"your_key\"\n  flowgen generate \"When a webhook is called, send 'Hello World' to Slack\""
)]
pub struct Cli {
    /// Workspace root used to locate flowgen.toml; defaults to current directory
    #[arg(long, global = true, value_name = "PATH", value_hint = ValueHint::DirPath)]
    pub workspace: Option<PathBuf>,

    /// Configuration file path (skips the workspace/home lookup)
    #[arg(long, global = true, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Gemini model ID, e.g. gemini-2.5-flash
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Directory where generated workflow files are written
    #[arg(long, global = true, value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub output_dir: Option<PathBuf>,

    /// API key environment variable to read (then GOOGLE_API_KEY)
    #[arg(long, global = true)]
    pub api_key_env: Option<String>,

    /// Log progress at info level
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log at debug level
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a workflow from a description and save it
    Generate {
        /// Workflow description; reads stdin when empty or "-"
        prompt: Vec<String>,

        /// Print the host output batch (`[[{"json": record}]]`) instead of the bare record
        #[arg(long)]
        items: bool,
    },

    /// Print the host node description as JSON
    Describe,

    /// Write a sample flowgen.toml into the workspace
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Default log filter when RUST_LOG is not set
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else if self.verbose {
            "info"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn generate_collects_prompt_words_and_global_flags() {
        let cli = Cli::parse_from([
            "flowgen",
            "generate",
            "send",
            "hello",
            "--items",
            "--model",
            "gemini-2.5-pro",
        ]);
        assert_eq!(cli.model.as_deref(), Some("gemini-2.5-pro"));
        match cli.command {
            Commands::Generate { prompt, items } => {
                assert_eq!(prompt, vec!["send", "hello"]);
                assert!(items);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn log_filter_follows_flags() {
        assert_eq!(Cli::parse_from(["flowgen", "describe"]).log_filter(), "warn");
        assert_eq!(Cli::parse_from(["flowgen", "-v", "describe"]).log_filter(), "info");
        assert_eq!(Cli::parse_from(["flowgen", "describe", "--debug"]).log_filter(), "debug");
    }
}

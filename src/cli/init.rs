use anyhow::{Context, Result};
use console::style;
use flowgen_core::FlowgenConfig;
use std::path::Path;

/// Handle the init command
pub fn handle_init_command(workspace: &Path, force: bool) -> Result<()> {
    println!("{}", style("Initialize flowgen configuration").blue().bold());
    println!("Workspace: {}", workspace.display());

    match FlowgenConfig::bootstrap_project(workspace, force)
        .context("failed to initialize configuration file")?
    {
        Some(path) => println!("{} {}", style("created:").green().bold(), path.display()),
        None => println!(
            "{} flowgen.toml already exists (use --force to overwrite)",
            style("skipped:").yellow().bold()
        ),
    }

    Ok(())
}

use anyhow::{Context, Result};
use flowgen_core::NodeDescription;

/// Handle the describe command
pub fn handle_describe_command() -> Result<()> {
    let description = NodeDescription::workflow_generator();
    let json =
        serde_json::to_string_pretty(&description).context("failed to serialize node description")?;
    println!("{json}");
    Ok(())
}

use anyhow::{Context, Result};
use console::style;
use flowgen_core::config::FlowgenConfig;
use flowgen_core::{GenerationRecord, WorkflowGenerator, WorkflowSummary};
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Join prompt words, or read the whole prompt from stdin when none are
/// given or the only word is "-".
pub async fn read_prompt(words: &[String]) -> Result<String> {
    if words.is_empty() || (words.len() == 1 && words[0] == "-") {
        let mut buf = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buf)
            .await
            .context("failed to read prompt from stdin")?;
        Ok(buf)
    } else {
        Ok(words.join(" "))
    }
}

/// Handle the generate command
pub async fn handle_generate_command(
    config: &FlowgenConfig,
    workspace: &Path,
    words: &[String],
    items: bool,
) -> Result<()> {
    let prompt = read_prompt(words).await?;
    let generator = WorkflowGenerator::from_config(config, workspace)?;

    eprintln!(
        "{} {} {} {} {}",
        style("flowgen:").yellow().bold(),
        style("Generating workflow with").dim(),
        generator.model(),
        style("into").dim(),
        generator.output_dir().display()
    );

    let record = generator.generate(&prompt).await?;

    let summary = WorkflowSummary::of(&record.workflow);
    eprintln!(
        "{} {} nodes, {} connections",
        style("flowgen:").yellow().bold(),
        summary.node_count,
        summary.connection_count
    );
    if record.file_saved {
        eprintln!("{} {}", style("saved:").green().bold(), record.saved_to_path.display());
    } else {
        eprintln!("{} {}", style("warning:").red().bold(), record.save_message);
    }

    println!("{}", render_output(record, items)?);
    Ok(())
}

/// Pretty JSON for stdout: the bare record, or `[[{"json": record}]]`
pub fn render_output(record: GenerationRecord, items: bool) -> Result<String> {
    if items {
        serde_json::to_string_pretty(&record.into_output_batches())
    } else {
        serde_json::to_string_pretty(&record)
    }
    .context("failed to serialize result")
}

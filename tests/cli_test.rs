//! Binary-level checks that need no network access.

use anyhow::Result;
use serde_json::Value;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Run flowgen inside `dir` with no API key, proxy or home config in reach
fn flowgen(dir: &Path, args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_flowgen"))
        .args(args)
        .current_dir(dir)
        .env("HOME", dir)
        .env("USERPROFILE", dir)
        .env_remove("GEMINI_API_KEY")
        .env_remove("GOOGLE_API_KEY")
        .env_remove("RUST_LOG")
        .env_remove("HTTP_PROXY")
        .env_remove("HTTPS_PROXY")
        .env_remove("ALL_PROXY")
        .env_remove("http_proxy")
        .env_remove("https_proxy")
        .env_remove("all_proxy")
        .output()?)
}

#[test]
fn describe_prints_node_description() -> Result<()> {
    let temp = TempDir::new()?;
    let output = flowgen(temp.path(), &["describe"])?;
    assert!(output.status.success());

    let description: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(description["name"], "workflowGeneratorAi");
    assert_eq!(description["properties"][0]["name"], "prompt");
    Ok(())
}

#[test]
fn init_writes_sample_config_once() -> Result<()> {
    let temp = TempDir::new()?;

    let first = flowgen(temp.path(), &["init"])?;
    assert!(first.status.success());
    let written = std::fs::read_to_string(temp.path().join("flowgen.toml"))?;
    assert!(written.contains("[generator]"));
    assert!(written.contains("model = \"gemini-2.5-flash\""));

    std::fs::write(temp.path().join("flowgen.toml"), "# edited\n")?;
    let second = flowgen(temp.path(), &["init"])?;
    assert!(second.status.success());
    assert_eq!(
        std::fs::read_to_string(temp.path().join("flowgen.toml"))?,
        "# edited\n"
    );
    Ok(())
}

#[test]
fn generate_without_api_key_fails_before_any_request() -> Result<()> {
    let temp = TempDir::new()?;
    let output_dir = temp.path().join("out");
    let output = flowgen(
        temp.path(),
        &[
            "generate",
            "--output-dir",
            output_dir.to_str().unwrap_or_default(),
            "send hello to slack",
        ],
    )?;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("GEMINI_API_KEY"), "stderr: {stderr}");
    assert!(!output_dir.exists());
    Ok(())
}

#[test]
fn generate_reads_dotenv_from_the_workspace_not_the_current_dir() -> Result<()> {
    let cwd = TempDir::new()?;
    let workspace = TempDir::new()?;
    std::fs::write(cwd.path().join(".env"), "GEMINI_API_KEY=cwd-key\n")?;
    // Nothing listens on port 1, so a resolved key ends in a transport failure.
    std::fs::write(
        workspace.path().join("flowgen.toml"),
        "[gemini]\nbase_url = \"http://127.0.0.1:1/v1beta\"\nconnect_timeout_secs = 2\n",
    )?;
    let workspace_arg = workspace.path().to_str().unwrap_or_default();

    let without_key = flowgen(cwd.path(), &["--workspace", workspace_arg, "generate", "hi"])?;
    assert!(!without_key.status.success());
    let stderr = String::from_utf8_lossy(&without_key.stderr);
    assert!(stderr.contains("No Gemini API key found"), "stderr: {stderr}");

    std::fs::write(workspace.path().join(".env"), "GEMINI_API_KEY=workspace-key\n")?;
    let with_key = flowgen(cwd.path(), &["--workspace", workspace_arg, "generate", "hi"])?;
    assert!(!with_key.status.success());
    let stderr = String::from_utf8_lossy(&with_key.stderr);
    assert!(!stderr.contains("No Gemini API key found"), "stderr: {stderr}");
    assert!(stderr.contains("Failed to generate workflow"), "stderr: {stderr}");
    assert!(!stderr.contains("workspace-key"));
    Ok(())
}

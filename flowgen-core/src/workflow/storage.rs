//! Persistence of generated workflows.
//!
//! Saving never fails the caller: every error is folded into a
//! [`SaveOutcome`] with `saved == false` and a readable message.

use crate::config::constants::output;
use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Result of one save attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub saved: bool,
    pub path: PathBuf,
    pub file_name: String,
    pub directory: PathBuf,
    pub message: String,
}

/// `n8n-workflow-<ISO-8601 UTC, millisecond precision>.json` with `:` and
/// `.` replaced by `-`, e.g. `n8n-workflow-2025-01-02T03-04-05-678Z.json`.
pub fn workflow_file_name(timestamp: DateTime<Utc>) -> String {
    let stamp = timestamp
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    format!("{}{}.{}", output::FILE_PREFIX, stamp, output::FILE_EXTENSION)
}

/// Writes workflows into a single output directory, creating it on demand
#[derive(Debug, Clone)]
pub struct WorkflowStore {
    output_dir: PathBuf,
}

impl WorkflowStore {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Save `workflow` under a name derived from the current time
    pub async fn save(&self, workflow: &Value) -> SaveOutcome {
        self.save_at(workflow, Utc::now()).await
    }

    /// Save `workflow` under a name derived from `timestamp`
    pub async fn save_at(&self, workflow: &Value, timestamp: DateTime<Utc>) -> SaveOutcome {
        let file_name = workflow_file_name(timestamp);
        let path = self.output_dir.join(&file_name);

        let (saved, message) = match self.write(&path, workflow).await {
            Ok(()) => {
                let message = format!("Workflow successfully saved to: {}", path.display());
                info!("{message}");
                (true, message)
            }
            Err(e) => {
                let message = format!("Failed to save workflow file: {e:#}");
                warn!("{message}");
                (false, message)
            }
        };

        SaveOutcome {
            saved,
            path,
            file_name,
            directory: self.output_dir.clone(),
            message,
        }
    }

    async fn write(&self, path: &Path, workflow: &Value) -> Result<()> {
        if !tokio::fs::try_exists(&self.output_dir).await.unwrap_or(false) {
            tokio::fs::create_dir_all(&self.output_dir)
                .await
                .with_context(|| {
                    format!("failed to create directory {}", self.output_dir.display())
                })?;
            info!("Created directory: {}", self.output_dir.display());
        }

        let content =
            serde_json::to_string_pretty(workflow).context("failed to serialize workflow")?;
        tokio::fs::write(path, content)
            .await
            .with_context(|| format!("failed to write {}", path.display()))
    }
}

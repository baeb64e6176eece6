use super::storage::SaveOutcome;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

/// Everything one generation produced, in the shape the host consumes.
///
/// The graph is stored twice: `n8n-autopaste` for clipboard-style import and
/// `workflow` for everything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    #[serde(rename = "n8n-autopaste")]
    pub n8n_autopaste: Value,
    pub workflow: Value,
    #[serde(rename = "fileSaved")]
    pub file_saved: bool,
    #[serde(rename = "savedToPath")]
    pub saved_to_path: PathBuf,
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(rename = "saveMessage")]
    pub save_message: String,
    pub directory: PathBuf,
    pub instructions: String,
    #[serde(rename = "originalPrompt")]
    pub original_prompt: String,
}

impl GenerationRecord {
    pub fn new(original_prompt: impl Into<String>, workflow: Value, save: SaveOutcome) -> Self {
        let instructions = if save.saved {
            format!(
                "File saved successfully! You can import it from: {}",
                save.path.display()
            )
        } else {
            "File save failed. Check the logs for error details.".to_string()
        };

        Self {
            n8n_autopaste: workflow.clone(),
            workflow,
            file_saved: save.saved,
            saved_to_path: save.path,
            file_name: save.file_name,
            save_message: save.message,
            directory: save.directory,
            instructions,
            original_prompt: original_prompt.into(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

/// One item of host output: `{"json": <record>}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionItem {
    pub json: GenerationRecord,
}

/// Host output for one invocation: one batch holding one item
pub type OutputBatches = Vec<Vec<ExecutionItem>>;

impl GenerationRecord {
    /// Wrap as the single item of a single output batch
    pub fn into_output_batches(self) -> OutputBatches {
        vec![vec![ExecutionItem { json: self }]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn outcome(saved: bool) -> SaveOutcome {
        SaveOutcome {
            saved,
            path: PathBuf::from("/out/n8n-workflow-x.json"),
            file_name: "n8n-workflow-x.json".to_string(),
            directory: PathBuf::from("/out"),
            message: if saved { "ok" } else { "failed" }.to_string(),
        }
    }

    #[test]
    fn serializes_with_host_keys() {
        let graph = json!({"nodes": [], "connections": {}});
        let record = GenerationRecord::new("make a flow", graph.clone(), outcome(true));
        let value = record.to_json().unwrap();

        assert_eq!(value["n8n-autopaste"], graph);
        assert_eq!(value["workflow"], graph);
        assert_eq!(value["fileSaved"], json!(true));
        assert_eq!(value["savedToPath"], json!("/out/n8n-workflow-x.json"));
        assert_eq!(value["fileName"], json!("n8n-workflow-x.json"));
        assert_eq!(value["saveMessage"], json!("ok"));
        assert_eq!(value["directory"], json!("/out"));
        assert_eq!(value["originalPrompt"], json!("make a flow"));
        assert!(value["instructions"].as_str().unwrap().contains("/out/n8n-workflow-x.json"));
    }

    #[test]
    fn failed_save_changes_instructions() {
        let record = GenerationRecord::new("", json!({}), outcome(false));
        assert!(!record.file_saved);
        assert!(record.instructions.starts_with("File save failed"));
    }

    #[test]
    fn wraps_into_single_batch_single_item() {
        let record = GenerationRecord::new("p", json!({}), outcome(true));
        let batches = record.clone().into_output_batches();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].len(), 1);
        assert_eq!(batches[0][0].json, record);
    }
}

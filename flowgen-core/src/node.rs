//! Host-facing node: description plus an `execute` entry point.
//!
//! The host hands over its parameter object and gets back one output batch
//! with one item. Everything else is delegated to [`WorkflowGenerator`].

use crate::config::constants::node;
use crate::error::GenerateError;
use crate::generator::WorkflowGenerator;
use crate::workflow::OutputBatches;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescription {
    pub display_name: String,
    pub name: String,
    pub icon: String,
    pub group: Vec<String>,
    pub version: u32,
    pub description: String,
    pub defaults: NodeDefaults,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
    pub properties: Vec<NodeProperty>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDefaults {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeProperty {
    pub display_name: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub default: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_options: Option<TypeOptions>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeOptions {
    pub rows: u32,
}

impl NodeDescription {
    pub fn workflow_generator() -> Self {
        Self {
            display_name: node::DISPLAY_NAME.to_string(),
            name: node::NAME.to_string(),
            icon: node::ICON.to_string(),
            group: vec![node::GROUP.to_string()],
            version: node::VERSION,
            description: node::DESCRIPTION.to_string(),
            defaults: NodeDefaults {
                name: node::DISPLAY_NAME.to_string(),
            },
            inputs: vec![node::CONNECTION_MAIN.to_string()],
            outputs: vec![node::CONNECTION_MAIN.to_string()],
            properties: vec![NodeProperty {
                display_name: "Describe the workflow you want to build".to_string(),
                name: node::PROMPT_PARAMETER.to_string(),
                kind: "string".to_string(),
                default: Value::String(String::new()),
                placeholder: Some(
                    "e.g., When a webhook is called, send \"Hello World\" to Slack.".to_string(),
                ),
                required: true,
                type_options: Some(TypeOptions { rows: 5 }),
            }],
        }
    }
}

/// The workflow generator as a host node
#[derive(Debug)]
pub struct WorkflowGeneratorNode {
    generator: WorkflowGenerator,
}

impl WorkflowGeneratorNode {
    pub fn new(generator: WorkflowGenerator) -> Self {
        Self { generator }
    }

    /// Read `prompt` from the host parameters (missing or non-string → "")
    pub fn prompt_parameter(parameters: &Value) -> &str {
        parameters
            .get(node::PROMPT_PARAMETER)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub async fn execute(&self, parameters: &Value) -> Result<OutputBatches, GenerateError> {
        let prompt = Self::prompt_parameter(parameters);
        let record = self.generator.generate(prompt).await?;
        Ok(record.into_output_batches())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn description_serializes_in_host_shape() {
        let value = serde_json::to_value(NodeDescription::workflow_generator()).unwrap();
        assert_eq!(value["displayName"], json!("Workflow Generator (AI)"));
        assert_eq!(value["name"], json!("workflowGeneratorAi"));
        assert_eq!(value["group"], json!(["transform"]));
        assert_eq!(value["inputs"], json!(["main"]));

        let prompt = &value["properties"][0];
        assert_eq!(prompt["name"], json!("prompt"));
        assert_eq!(prompt["type"], json!("string"));
        assert_eq!(prompt["default"], json!(""));
        assert_eq!(prompt["typeOptions"]["rows"], json!(5));
        assert_eq!(prompt["required"], json!(true));
    }

    #[test]
    fn prompt_parameter_defaults_to_empty() {
        assert_eq!(WorkflowGeneratorNode::prompt_parameter(&json!({})), "");
        assert_eq!(
            WorkflowGeneratorNode::prompt_parameter(&json!({"prompt": 42})),
            ""
        );
        assert_eq!(
            WorkflowGeneratorNode::prompt_parameter(&json!({"prompt": "hi"})),
            "hi"
        );
    }
}

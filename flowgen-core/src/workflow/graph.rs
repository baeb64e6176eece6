//! Read-only view over a generated graph, used for summaries.
//!
//! The generator treats the graph as opaque JSON; nothing here is required
//! for it to be accepted.

use serde_json::Value;

/// Counts and entry point of a generated workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowSummary {
    pub node_count: usize,
    pub connection_count: usize,
    /// `type` of the first node, normally the trigger
    pub first_node_type: Option<String>,
}

impl WorkflowSummary {
    pub fn of(workflow: &Value) -> Self {
        let nodes = workflow.get("nodes").and_then(Value::as_array);
        let first_node_type = nodes
            .and_then(|nodes| nodes.first())
            .and_then(|node| node.get("type"))
            .and_then(Value::as_str)
            .map(str::to_string);

        // connections: { source: { channel: [[{node, type, index}, ...], ...] } }
        let connection_count = workflow
            .get("connections")
            .and_then(Value::as_object)
            .map(|sources| {
                sources
                    .values()
                    .filter_map(Value::as_object)
                    .flat_map(|channels| channels.values())
                    .filter_map(Value::as_array)
                    .flatten()
                    .filter_map(Value::as_array)
                    .map(Vec::len)
                    .sum::<usize>()
            })
            .unwrap_or(0);

        Self {
            node_count: nodes.map_or(0, Vec::len),
            connection_count,
            first_node_type,
        }
    }

    pub fn starts_with_trigger(&self) -> bool {
        self.first_node_type
            .as_deref()
            .is_some_and(|t| t.ends_with("Trigger") || t.ends_with(".webhook"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::workflow::EXAMPLE_WORKFLOW;
    use serde_json::json;

    #[test]
    fn summarizes_the_example() {
        let workflow: Value = serde_json::from_str(EXAMPLE_WORKFLOW).unwrap();
        let summary = WorkflowSummary::of(&workflow);
        assert_eq!(summary.node_count, 2);
        assert_eq!(summary.connection_count, 1);
        assert_eq!(
            summary.first_node_type.as_deref(),
            Some("n8n-nodes-base.manualTrigger")
        );
        assert!(summary.starts_with_trigger());
    }

    #[test]
    fn tolerates_unexpected_shapes() {
        let summary = WorkflowSummary::of(&json!(["not", "an", "object"]));
        assert_eq!(summary.node_count, 0);
        assert_eq!(summary.connection_count, 0);
        assert!(!summary.starts_with_trigger());
    }
}

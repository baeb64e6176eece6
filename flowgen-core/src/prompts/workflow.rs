//! Instruction envelope for n8n workflow generation.
//!
//! The envelope is fixed apart from the user's request, which is embedded
//! verbatim between the worked example and the output marker.

/// Last line of every composed prompt
pub const OUTPUT_MARKER: &str = "YOUR JSON OUTPUT:";

const INSTRUCTIONS: &str = r#"You are an expert n8n workflow generator. Your task is to convert the user's plain text request into a valid n8n workflow JSON object.
The final output MUST be ONLY the JSON object, with no other text, comments, or markdown "json" tags before or after it.
The JSON must have two top-level keys: "nodes" and "connections".
Always start the workflow with a trigger node, like "n8n-nodes-base.manualTrigger" or "n8n-nodes-base.webhook".
Do not try to guess credentials; leave the "credentials" block empty.
"#;

/// The worked example, also used as a canned model reply in tests
pub const EXAMPLE_REQUEST: &str =
    "Create a workflow that sends 'hello world' to the 'general' channel in Slack when I start it manually.";

pub const EXAMPLE_WORKFLOW: &str = r#"{
"nodes": [
    { "parameters": {}, "id": "f0ed5a53-5523-41a4-9961-a47ad43e26a3", "name": "Start", "type": "n8n-nodes-base.manualTrigger", "typeVersion": 1, "position": [820, 300] },
    { "parameters": { "channel": "general", "text": "hello world" }, "id": "e6f49129-844c-4a11-9a29-07f0f622919d", "name": "Slack", "type": "n8n-nodes-base.slack", "typeVersion": 2, "position": [1040, 300], "credentials": {} }
],
"connections": {
    "Start": { "main": [ [ { "node": "Slack", "type": "main", "index": 0 } ] ] }
}
}"#;

const END_OF_EXAMPLES: &str = "--- END OF EXAMPLES ---\nNow, generate the JSON for the following user request.\n";

/// Build the full prompt for `request`. The request is not escaped or
/// trimmed; an empty request is forwarded as-is.
pub fn compose_workflow_prompt(request: &str) -> String {
    let mut prompt = String::with_capacity(
        INSTRUCTIONS.len() + EXAMPLE_REQUEST.len() + EXAMPLE_WORKFLOW.len() + request.len() + 256,
    );
    prompt.push_str(INSTRUCTIONS);
    prompt.push_str("EXAMPLE:\n");
    prompt.push_str(&format!("USER PROMPT: \"{EXAMPLE_REQUEST}\"\n"));
    prompt.push_str(OUTPUT_MARKER);
    prompt.push('\n');
    prompt.push_str(EXAMPLE_WORKFLOW);
    prompt.push('\n');
    prompt.push_str(END_OF_EXAMPLES);
    prompt.push_str(&format!("USER PROMPT: \"{request}\"\n"));
    prompt.push_str(OUTPUT_MARKER);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_request_and_ends_with_marker() {
        for request in [
            "",
            "When a webhook is called, send \"Hello World\" to Slack.",
            "multi\nline\n  request with {braces} and ```fences```",
        ] {
            let prompt = compose_workflow_prompt(request);
            assert!(prompt.contains(request));
            assert!(prompt.ends_with(OUTPUT_MARKER));
        }
    }

    #[test]
    fn request_follows_the_example() {
        let prompt = compose_workflow_prompt("send an email every monday");
        let example_at = prompt.find(EXAMPLE_WORKFLOW).unwrap();
        let request_at = prompt.find("send an email every monday").unwrap();
        assert!(example_at < request_at);
    }

    #[test]
    fn example_workflow_is_valid_json() {
        let parsed: serde_json::Value = serde_json::from_str(EXAMPLE_WORKFLOW).unwrap();
        assert_eq!(parsed["nodes"].as_array().map(Vec::len), Some(2));
        assert!(parsed["connections"]["Start"].is_object());
    }
}

use serde_json::Value;

const FENCE_WITH_TAG: &str = "```json";
const FENCE: &str = "```";

/// Remove every markdown code-fence marker from a model reply and trim it.
///
/// Tagged markers go first so "```json" does not leave a stray "json"
/// behind. After this pass no run of three backticks remains, which makes the
/// function idempotent.
pub fn strip_code_fences(text: &str) -> String {
    text.replace(FENCE_WITH_TAG, "")
        .replace(FENCE, "")
        .trim()
        .to_string()
}

/// Strip fences, then parse what is left as JSON
pub fn parse_model_output(text: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(&strip_code_fences(text))
}

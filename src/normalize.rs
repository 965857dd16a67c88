use crate::error::ChatError;

/// Checklist appended when the upstream error carries a structured message.
/// These are the usual suspects when a workflow endpoint rejects a chat turn.
const TROUBLESHOOTING_CHECKLIST: &str = "\
Please check that:
- the workflow is active and reachable at the configured endpoint
- the trigger node accepts POST requests
- the endpoint URL points at the production webhook, not the test one
- any credentials the workflow needs (API keys, tokens) are configured";

/// Produce the single user-facing string for a failure.
///
/// Base behavior is a generic message embedding the raw error text. If the
/// text contains an embedded JSON object with a `message` field (workflow
/// engines often wrap their error JSON in prose), that message is surfaced
/// with a troubleshooting checklist instead. The extraction is best-effort:
/// any failure inside it falls back to the generic message.
pub fn user_message(error: &ChatError) -> String {
    let raw = error.to_string();

    if let Some(region) = first_json_object(&raw)
        && let Ok(value) = serde_json::from_str::<serde_json::Value>(region)
        && let Some(message) = value.get("message").and_then(|m| m.as_str())
    {
        return format!(
            "The workflow could not process the request: {}\n\n{}",
            message, TROUBLESHOOTING_CHECKLIST
        );
    }

    format!("Something went wrong while talking to the workflow: {}", raw)
}

/// Locate the first balanced `{...}` region in free text.
///
/// Depth-counting scan that respects string literals and escapes, so braces
/// inside quoted values do not end the region early. Nested objects are
/// consumed whole; unbalanced text yields no match.
fn first_json_object(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let start = bytes.iter().position(|&b| b == b'{')?;

    let mut depth = 0;
    let mut in_string = false;
    let mut escaped = false;

    for (i, &byte) in bytes.iter().enumerate().skip(start) {
        if in_string {
            if escaped {
                escaped = false;
            } else {
                match byte {
                    b'\\' => escaped = true,
                    b'"' => in_string = false,
                    _ => {}
                }
            }
        } else {
            match byte {
                b'"' => in_string = true,
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(&text[start..=i]);
                    }
                }
                _ => {}
            }
        }
    }

    None
}

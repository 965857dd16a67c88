use serde::Deserialize;

/// One decoded unit extracted from a whole JSON body or a single `data:`
/// line. Only the text field matters to the conversation; anything else in
/// the payload is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFrame {
    #[serde(default)]
    pub text: Option<String>,
}

/// Extract the payload of a `data:` frame, if the line is one.
///
/// The line is trimmed first; a frame starts with the literal `data:` and
/// the payload is everything after the prefix. Lines without the prefix and
/// frames whose payload is blank are ignored, never an error.
pub fn data_payload(line: &str) -> Option<&str> {
    let payload = line.trim().strip_prefix("data:")?.trim();
    if payload.is_empty() {
        None
    } else {
        Some(payload)
    }
}

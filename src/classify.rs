use reqwest::header::{CONTENT_TYPE, HeaderMap};

/// The two reply shapes the engine knows how to reconcile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// Whole body is one JSON object; decode once, set the open message.
    SingleObject,
    /// Line-oriented event stream; reassemble incrementally.
    EventStream,
}

/// Route on the declared content kind. A single-JSON-object media type takes
/// the single-object path; anything else, including a missing or unreadable
/// header, takes the stream path. No body sniffing.
pub fn classify(headers: &HeaderMap) -> ResponseKind {
    let is_json = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.contains("application/json"));

    if is_json {
        ResponseKind::SingleObject
    } else {
        ResponseKind::EventStream
    }
}

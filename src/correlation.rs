use crate::conversation::ConversationState;
use reqwest::header::HeaderMap;

/// Fixed header key carrying the session's correlation id, both directions.
pub const CORRELATION_HEADER: &str = "x-conversation-id";

/// Capture the correlation id from a response if the session does not hold
/// one yet. First non-empty value wins for the session lifetime; later
/// responses cannot overwrite it.
pub fn observe(state: &mut ConversationState, headers: &HeaderMap) {
    if state.correlation_id().is_some() {
        return;
    }

    if let Some(id) = headers.get(CORRELATION_HEADER).and_then(|v| v.to_str().ok()) {
        state.record_correlation(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn headers_with(id: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CORRELATION_HEADER, HeaderValue::from_str(id).unwrap());
        headers
    }

    #[test]
    fn test_captures_first_value() {
        let mut state = ConversationState::new();
        observe(&mut state, &headers_with("conv-1"));
        assert_eq!(state.correlation_id(), Some("conv-1"));
    }

    #[test]
    fn test_first_wins_across_responses() {
        let mut state = ConversationState::new();
        observe(&mut state, &headers_with("conv-1"));
        observe(&mut state, &headers_with("conv-2"));
        assert_eq!(state.correlation_id(), Some("conv-1"));
    }

    #[test]
    fn test_empty_value_not_stored() {
        let mut state = ConversationState::new();
        observe(&mut state, &headers_with(""));
        assert_eq!(state.correlation_id(), None);
    }

    #[test]
    fn test_missing_header_leaves_state_untouched() {
        let mut state = ConversationState::new();
        observe(&mut state, &HeaderMap::new());
        assert_eq!(state.correlation_id(), None);
    }
}

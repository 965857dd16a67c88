use crate::streaming::frame::{RawFrame, data_payload};
use crate::streaming::line_buffer::LineBuffer;

/// Reassembles streamed response chunks into ordered text fragments.
///
/// Each chunk is split into complete lines, every `data:` frame is decoded
/// as a [`RawFrame`], and the `text` fields come back in arrival order. A
/// frame that fails to decode is logged and skipped; it never aborts the
/// rest of the stream. The caller owns the read loop and appends each
/// fragment to the open message as it arrives.
#[derive(Debug, Default)]
pub struct StreamAssembler {
    lines: LineBuffer,
}

impl StreamAssembler {
    pub fn new() -> Self {
        Self {
            lines: LineBuffer::new(),
        }
    }

    /// Feed new data and extract the text fragments it completes.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<String> {
        let mut fragments = Vec::new();

        for line in self.lines.push(chunk) {
            let Some(payload) = data_payload(&line) else {
                continue;
            };

            match serde_json::from_str::<RawFrame>(payload) {
                Ok(frame) => {
                    if let Some(text) = frame.text {
                        fragments.push(text);
                    }
                }
                Err(e) => {
                    // Skip this frame only; later frames may be fine
                    tracing::debug!(error = %e, payload = %payload, "Skipping malformed stream frame");
                }
            }
        }

        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragments_in_order() {
        let mut asm = StreamAssembler::new();
        let fragments = asm.feed(b"data: {\"text\":\"He\"}\ndata: {\"text\":\"llo\"}\n");
        assert_eq!(fragments, vec!["He", "llo"]);
    }

    #[test]
    fn test_split_mid_line() {
        let mut asm = StreamAssembler::new();
        let mut fragments = asm.feed(b"data: {\"text\":\"He\"}\ndata: {\"te");
        assert_eq!(fragments, vec!["He"]);

        fragments.extend(asm.feed(b"xt\":\"llo\"}\n"));
        assert_eq!(fragments.concat(), "Hello");
    }

    #[test]
    fn test_malformed_frame_skipped() {
        let mut asm = StreamAssembler::new();
        let fragments =
            asm.feed(b"data: {\"text\":\"a\"}\ndata: {not json\ndata: {\"text\":\"b\"}\n");
        assert_eq!(fragments, vec!["a", "b"]);
    }

    #[test]
    fn test_non_data_lines_ignored() {
        let mut asm = StreamAssembler::new();
        let fragments =
            asm.feed(b"event: delta\ndata: {\"text\":\"x\"}\n\n: keepalive\ndata: {\"text\":\"y\"}\n");
        assert_eq!(fragments, vec!["x", "y"]);
    }

    #[test]
    fn test_frames_without_text_skipped() {
        let mut asm = StreamAssembler::new();
        let fragments = asm.feed(b"data: {\"sessionId\":\"s1\"}\ndata: {\"text\":\"hi\"}\n");
        assert_eq!(fragments, vec!["hi"]);
    }

    #[test]
    fn test_unterminated_tail_not_emitted() {
        let mut asm = StreamAssembler::new();
        let fragments = asm.feed(b"data: {\"text\":\"done\"}\ndata: {\"text\":\"never fini");
        assert_eq!(fragments, vec!["done"]);
    }

    #[test]
    fn test_concatenation_across_many_chunks() {
        let body = b"data: {\"text\":\"a\"}\ndata: {\"text\":\"b\"}\ndata: {\"text\":\"c\"}\n";
        let mut collected = String::new();

        // Feed one byte at a time; order and content must survive
        let mut asm = StreamAssembler::new();
        for byte in body.iter() {
            for fragment in asm.feed(std::slice::from_ref(byte)) {
                collected.push_str(&fragment);
            }
        }
        assert_eq!(collected, "abc");
    }
}

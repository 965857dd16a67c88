use bytes::{Buf, BytesMut};

/// Accumulates raw bytes from a streaming source and yields complete lines.
///
/// Splitting happens on the raw `\n` byte before any text decoding, so a
/// multi-byte UTF-8 sequence split across chunk boundaries stays buffered
/// until its line completes. The suffix after the last terminator is
/// retained for the next push; an un-terminated remainder at stream end is
/// discarded with the buffer.
#[derive(Debug)]
pub struct LineBuffer {
    buffer: BytesMut,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self {
            buffer: BytesMut::with_capacity(8192),
        }
    }

    /// Feed a chunk and extract every line completed by it, in order.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buffer.extend_from_slice(chunk);

        let mut lines = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let mut line = self.buffer.split_to(pos + 1);
            // Drop the terminator, and a preceding \r if the source uses CRLF
            line.truncate(pos);
            if line.last() == Some(&b'\r') {
                line.truncate(line.len() - 1);
            }
            lines.push(String::from_utf8_lossy(&line).into_owned());
        }

        // Keep the allocation bounded across long streams
        if self.buffer.is_empty() && self.buffer.capacity() > 65536 {
            self.buffer = BytesMut::with_capacity(8192);
        }

        lines
    }

    /// Bytes held back waiting for a terminator.
    pub fn pending_len(&self) -> usize {
        self.buffer.remaining()
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

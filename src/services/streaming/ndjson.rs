//! Newline-delimited JSON stream reassembly

use super::decoder::Utf8Decoder;
use crate::types::GenerateChunk;

/// Reassembles newline-delimited JSON objects from raw byte chunks.
///
/// A chunk may carry zero, one, or many newline-terminated objects, and may
/// split an object (or a multi-byte codepoint) across two reads. Only
/// complete lines reach the parser; the unterminated tail is held back as
/// leftover until a later chunk supplies its newline.
pub struct NdjsonReassembler {
    decoder: Utf8Decoder,
    leftover: String,
}

impl NdjsonReassembler {
    pub fn new() -> Self {
        Self {
            decoder: Utf8Decoder::new(),
            leftover: String::new(),
        }
    }

    /// Feed one raw chunk, returning the fragments it completed.
    ///
    /// A line that is not valid JSON is logged and skipped; the stream
    /// continues with the next line.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<GenerateChunk> {
        let text = self.decoder.decode(chunk);
        self.leftover.push_str(&text);

        let mut fragments = Vec::new();
        while let Some(newline) = self.leftover.find('\n') {
            let line: String = self.leftover.drain(..=newline).collect();
            let line = line.trim_end_matches(['\r', '\n']);
            if line.is_empty() {
                continue;
            }
            match serde_json::from_str::<GenerateChunk>(line) {
                Ok(fragment) => fragments.push(fragment),
                Err(e) => tracing::warn!("Skipping malformed JSON line from backend: {}", e),
            }
        }
        fragments
    }

    /// End of stream. An unterminated tail is dropped without parsing: the
    /// backend terminates every object with a newline, so a tail only exists
    /// when it closed mid-object.
    pub fn finish(&mut self) {
        if !self.leftover.is_empty() {
            tracing::debug!(
                "Discarding {} bytes of unterminated tail at end of stream",
                self.leftover.len()
            );
            self.leftover.clear();
        }
    }
}

impl Default for NdjsonReassembler {
    fn default() -> Self {
        Self::new()
    }
}

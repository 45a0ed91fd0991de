//! Incremental UTF-8 decoding for streamed bytes

/// Streaming UTF-8 decoder.
///
/// A multi-byte codepoint split across two reads is held back until its
/// remaining bytes arrive. Invalid sequences decode to U+FFFD instead of
/// failing the stream.
pub struct Utf8Decoder {
    pending: Vec<u8>,
}

impl Utf8Decoder {
    pub fn new() -> Self {
        Self { pending: Vec::new() }
    }

    /// Decode the next chunk, returning all text completed by it.
    pub fn decode(&mut self, chunk: &[u8]) -> String {
        self.pending.extend_from_slice(chunk);

        let mut out = String::new();
        let mut pos = 0;
        while pos < self.pending.len() {
            match std::str::from_utf8(&self.pending[pos..]) {
                Ok(valid) => {
                    out.push_str(valid);
                    pos = self.pending.len();
                }
                Err(err) => {
                    let valid_end = pos + err.valid_up_to();
                    out.push_str(&String::from_utf8_lossy(&self.pending[pos..valid_end]));
                    match err.error_len() {
                        // Invalid sequence: substitute and resume after it.
                        Some(bad) => {
                            out.push(char::REPLACEMENT_CHARACTER);
                            pos = valid_end + bad;
                        }
                        // Truncated codepoint: keep the tail for the next chunk.
                        None => {
                            self.pending.drain(..valid_end);
                            return out;
                        }
                    }
                }
            }
        }

        self.pending.clear();
        out
    }
}

impl Default for Utf8Decoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passes_through() {
        let mut decoder = Utf8Decoder::new();
        assert_eq!(decoder.decode(b"hello"), "hello");
        assert_eq!(decoder.decode(b" world"), " world");
    }

    #[test]
    fn test_codepoint_split_across_chunks() {
        // "héllo" with the two-byte 'é' (0xC3 0xA9) split between reads
        let bytes = "héllo".as_bytes();
        let mut decoder = Utf8Decoder::new();
        let first = decoder.decode(&bytes[..2]);
        let second = decoder.decode(&bytes[2..]);
        assert_eq!(format!("{first}{second}"), "héllo");
        assert_eq!(first, "h");
    }

    #[test]
    fn test_four_byte_codepoint_split_three_ways() {
        // U+1F600 is four bytes; deliver them one at a time
        let bytes = "a😀b".as_bytes();
        let mut decoder = Utf8Decoder::new();
        let mut out = String::new();
        for byte in bytes {
            out.push_str(&decoder.decode(std::slice::from_ref(byte)));
        }
        assert_eq!(out, "a😀b");
    }

    #[test]
    fn test_invalid_sequence_becomes_replacement_char() {
        let mut decoder = Utf8Decoder::new();
        let out = decoder.decode(&[b'a', 0xFF, b'b']);
        assert_eq!(out, "a\u{FFFD}b");
    }

    #[test]
    fn test_every_split_point_preserves_content() {
        let text = "öne\ntwö\n日本語\n";
        let bytes = text.as_bytes();
        for split in 0..=bytes.len() {
            let mut decoder = Utf8Decoder::new();
            let mut out = decoder.decode(&bytes[..split]);
            out.push_str(&decoder.decode(&bytes[split..]));
            assert_eq!(out, text, "split at byte {split}");
        }
    }
}

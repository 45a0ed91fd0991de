//! Ollama generate API wire types

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/generate`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
}

/// One newline-delimited JSON object from the generate response stream.
///
/// Ollama attaches more fields (timings, context, eval counts) on the final
/// object; everything the relay does not forward is ignored here.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateChunk {
    #[serde(default)]
    pub response: String,
    #[serde(default)]
    pub done: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_tolerates_missing_and_extra_fields() {
        let chunk: GenerateChunk = serde_json::from_str(r#"{"response":"hi"}"#).unwrap();
        assert_eq!(chunk.response, "hi");
        assert!(!chunk.done);

        let last: GenerateChunk =
            serde_json::from_str(r#"{"done":true,"total_duration":123,"context":[1,2]}"#).unwrap();
        assert!(last.response.is_empty());
        assert!(last.done);
    }
}

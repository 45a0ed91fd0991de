//! Review request/response wire types

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRequest {
    pub code: String,
    pub prompt: String,
}

impl ReviewRequest {
    /// Full prompt sent to the model: the instruction first, the code below.
    pub fn to_prompt(&self) -> String {
        format!("Review the following code for {}:\n\n{}", self.prompt, self.code)
    }
}

/// Error envelope returned instead of a stream when a review fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub mod generate;
pub mod review;

pub use generate::{GenerateChunk, GenerateRequest};
pub use review::{ErrorResponse, ReviewRequest};

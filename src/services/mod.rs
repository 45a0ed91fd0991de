pub mod ollama;
pub mod streaming;
pub mod template;

pub use ollama::OllamaClient;
pub use streaming::{NdjsonReassembler, Utf8Decoder};
pub use template::TemplateEngine;

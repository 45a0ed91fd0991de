//! Backend stream reassembly

mod decoder;
mod ndjson;

pub use decoder::Utf8Decoder;
pub use ndjson::NdjsonReassembler;

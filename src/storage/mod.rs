//! Storage destinations for extracted records

mod ndjson;

pub use ndjson::NdjsonWriter;

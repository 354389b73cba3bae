//! Typed errors for the Glue extractor
//!
//! Everything in the crate returns `eyre::Result`. These variants travel inside
//! the report so callers can tell the failure kinds apart with
//! `report.downcast_ref::<GlueError>()`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GlueError {
    /// A table entry returned by SearchTables lacks a required field, or the
    /// field holds a value that cannot be used.
    #[error("malformed catalog entry #{index}: field '{field}' {problem}")]
    MalformedEntry {
        index: usize,
        field: &'static str,
        problem: String,
    },

    /// The SearchTables response itself does not have the expected shape.
    #[error("malformed SearchTables response: {0}")]
    MalformedResponse(String),

    /// Glue answered with a non-success status.
    #[error("Glue API error ({status}) {kind}: {message}")]
    Api {
        status: u16,
        kind: String,
        message: String,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl GlueError {
    pub fn missing_field(index: usize, field: &'static str) -> Self {
        Self::MalformedEntry {
            index,
            field,
            problem: "is missing".to_string(),
        }
    }

    /// `expected` is the full noun phrase, article included ("an epoch timestamp")
    pub fn wrong_type(index: usize, field: &'static str, expected: &str) -> Self {
        Self::MalformedEntry {
            index,
            field,
            problem: format!("is not {}", expected),
        }
    }
}

//! Glue Last Updated
//!
//! An ETL extractor that reads per-table last-updated times from the AWS Glue
//! metastore

pub mod cli;
pub mod client;
pub mod error;
pub mod etl;
pub mod glue;
pub mod storage;

// Re-exports for convenience
pub use client::GlueClient;
pub use error::GlueError;
pub use etl::{Extractor, IdentityTransformer, Loader, Pipeline, Transformer};
pub use glue::{
    CatalogSearch, ExtractorOptions, GlueLastUpdatedExtractor, QueryParameters, TableLastUpdated,
};
pub use storage::NdjsonWriter;

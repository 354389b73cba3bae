//! Core ETL (Extract, Transform, Load) abstractions
//!
//! This module provides trait definitions for building ingestion connectors
//! that pull records from sources, reshape them, and load them to destinations.

mod extract;
mod load;
mod pipeline;
mod transform;

pub use extract::Extractor;
pub use load::Loader;
pub use pipeline::Pipeline;
pub use transform::{IdentityTransformer, Transformer};

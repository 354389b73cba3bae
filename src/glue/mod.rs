//! Glue metastore extraction
//!
//! - [`GlueLastUpdatedExtractor`]: pulls one [`TableLastUpdated`] per table
//! - [`CatalogSearch`]: the SearchTables seam the extractor talks to
//! - [`QueryParameters`] / [`ExtractorOptions`]: cluster label and filters

mod config;
mod entry;
mod extractor;
mod projection;
mod record;
mod search;

pub use config::{DEFAULT_CLUSTER, ExtractorOptions, MAX_PAGE_SIZE, QueryParameters};
pub use entry::CatalogEntry;
pub use extractor::{GlueLastUpdatedExtractor, SCOPE};
pub use projection::LastUpdatedProjection;
pub use record::{GLUE_DB, TableLastUpdated};
pub use search::{
    CatalogSearch, Comparator, PropertyPredicate, SearchTablesPage, SearchTablesRequest,
};

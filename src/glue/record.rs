//! The per-table record the Glue extractor emits

use serde::{Deserialize, Serialize};

/// Value of [`TableLastUpdated::db`] for every record from this extractor
pub const GLUE_DB: &str = "glue";

/// When a table was last updated, as emitted by the Glue extractor
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableLastUpdated {
    pub cluster: String,
    pub db: String,
    pub schema: String,
    pub table_name: String,
    pub last_updated_epoch_seconds: i64,
}

impl std::fmt::Display for TableLastUpdated {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}://{}.{}/{} @ {}",
            self.db, self.cluster, self.schema, self.table_name, self.last_updated_epoch_seconds
        )
    }
}

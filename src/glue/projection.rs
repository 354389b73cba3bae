//! Projection of a Glue table entry onto a [`TableLastUpdated`] record

use super::{CatalogEntry, GLUE_DB, TableLastUpdated};
use crate::etl::Transformer;
use eyre::Result;

/// Maps catalog entries to last-updated records for one cluster
///
/// - `schema` ← `DatabaseName`
/// - `table_name` ← `Name`
/// - `last_updated_epoch_seconds` ← `UpdateTime`, fractional seconds dropped
#[derive(Clone, Debug)]
pub struct LastUpdatedProjection {
    cluster: String,
}

impl LastUpdatedProjection {
    pub fn new(cluster: impl Into<String>) -> Self {
        Self {
            cluster: cluster.into(),
        }
    }

    pub fn project(&self, entry: CatalogEntry) -> TableLastUpdated {
        TableLastUpdated {
            cluster: self.cluster.clone(),
            db: GLUE_DB.to_string(),
            schema: entry.database_name,
            table_name: entry.name,
            last_updated_epoch_seconds: entry.update_time.timestamp(),
        }
    }
}

impl Transformer for LastUpdatedProjection {
    type Input = CatalogEntry;
    type Output = TableLastUpdated;

    fn transform(&self, input: Self::Input) -> Result<Self::Output> {
        Ok(self.project(input))
    }
}

//! Typed read of a Glue table entry

use crate::error::GlueError;
use aws_sdk_glue::types::Table;
use chrono::{DateTime, Utc};

pub const DATABASE_NAME: &str = "DatabaseName";
pub const NAME: &str = "Name";
pub const UPDATE_TIME: &str = "UpdateTime";

/// The fields of a Glue table entry the extractor depends on
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogEntry {
    pub database_name: String,
    pub name: String,
    pub update_time: DateTime<Utc>,
}

impl CatalogEntry {
    /// Read the required fields out of an entry from `TableList`.
    ///
    /// `index` is the entry's position in the scan and only feeds the error.
    /// Every other field on the entry is ignored. The SDK fills an absent
    /// `Name` with an empty string, so an empty name counts as missing.
    pub fn from_table(index: usize, table: &Table) -> Result<Self, GlueError> {
        let database_name = table
            .database_name()
            .ok_or_else(|| GlueError::missing_field(index, DATABASE_NAME))?;

        let name = table.name();
        if name.is_empty() {
            return Err(GlueError::missing_field(index, NAME));
        }

        let update_time = table
            .update_time()
            .ok_or_else(|| GlueError::missing_field(index, UPDATE_TIME))?;
        let update_time = DateTime::from_timestamp(update_time.secs(), update_time.subsec_nanos())
            .ok_or_else(|| GlueError::wrong_type(index, UPDATE_TIME, "a representable timestamp"))?;

        Ok(Self {
            database_name: database_name.to_string(),
            name: name.to_string(),
            update_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_glue::primitives::DateTime as SdkDateTime;
    use aws_sdk_glue::types::StorageDescriptor;

    #[test]
    fn test_reads_required_fields() {
        let table = Table::builder()
            .database_name("sales")
            .name("orders")
            .update_time(SdkDateTime::from_secs_f64(1700000000.75))
            .storage_descriptor(
                StorageDescriptor::builder()
                    .location("s3://bucket/orders")
                    .build(),
            )
            .build()
            .unwrap();

        let entry = CatalogEntry::from_table(0, &table).unwrap();
        assert_eq!(entry.database_name, "sales");
        assert_eq!(entry.name, "orders");
        assert_eq!(entry.update_time.timestamp(), 1700000000);
        assert_eq!(entry.update_time.timestamp_subsec_millis(), 750);
    }

    #[test]
    fn test_whole_second_update_time() {
        let table = Table::builder()
            .database_name("a")
            .name("b")
            .update_time(SdkDateTime::from_secs(1600000000))
            .build()
            .unwrap();
        let entry = CatalogEntry::from_table(0, &table).unwrap();
        assert_eq!(entry.update_time.timestamp(), 1600000000);
    }

    #[test]
    fn test_missing_update_time() {
        let table = Table::builder()
            .database_name("sales")
            .name("orders")
            .build()
            .unwrap();
        let err = CatalogEntry::from_table(4, &table).unwrap_err();
        assert_eq!(err, GlueError::missing_field(4, UPDATE_TIME));
    }

    #[test]
    fn test_empty_name_is_missing() {
        let table = Table::builder()
            .database_name("sales")
            .name("")
            .update_time(SdkDateTime::from_secs(1))
            .build()
            .unwrap();
        let err = CatalogEntry::from_table(0, &table).unwrap_err();
        assert_eq!(err, GlueError::missing_field(0, NAME));
    }

    #[test]
    fn test_missing_database_name_reported_first() {
        let table = Table::builder().name("orders").build().unwrap();
        let err = CatalogEntry::from_table(1, &table).unwrap_err();
        assert_eq!(err, GlueError::missing_field(1, DATABASE_NAME));
    }

    #[test]
    fn test_out_of_range_update_time() {
        let table = Table::builder()
            .database_name("sales")
            .name("orders")
            .update_time(SdkDateTime::from_secs(i64::MAX))
            .build()
            .unwrap();
        let err = CatalogEntry::from_table(2, &table).unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed catalog entry #2: field 'UpdateTime' is not a representable timestamp"
        );
    }
}

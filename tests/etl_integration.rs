//! Integration tests for the ETL pipeline with the Glue extractor
//!
//! These tests run the extractor end to end into NDJSON files on disk.

use eyre::Result;
use glue_last_updated::etl::{Extractor, IdentityTransformer, Pipeline};
use glue_last_updated::glue::{
    CatalogSearch, GlueLastUpdatedExtractor, QueryParameters, SearchTablesPage,
    SearchTablesRequest, TableLastUpdated,
};
use glue_last_updated::storage::NdjsonWriter;
use aws_sdk_glue::primitives::DateTime;
use aws_sdk_glue::types::Table;
use tempfile::TempDir;

fn table(db: &str, name: &str, update_time: f64) -> Table {
    Table::builder()
        .database_name(db)
        .name(name)
        .update_time(DateTime::from_secs_f64(update_time))
        .build()
        .unwrap()
}

/// Two-page catalog keyed on the continuation token
struct TwoPageCatalog;

impl CatalogSearch for TwoPageCatalog {
    async fn search_tables(&self, request: &SearchTablesRequest) -> Result<SearchTablesPage> {
        match request.next_token.as_deref() {
            None => Ok(SearchTablesPage::new(
                vec![
                    table("sales", "orders", 1700000000.75),
                    table("sales", "customers", 1690000000.0),
                ],
                Some("next".to_string()),
            )),
            Some("next") => Ok(SearchTablesPage::new(
                vec![table("finance", "ledger", 1710000000.2)],
                None,
            )),
            Some(other) => eyre::bail!("unexpected token {}", other),
        }
    }
}

/// Catalog whose second entry lacks a name (the SDK reads it as empty)
struct BrokenCatalog;

impl CatalogSearch for BrokenCatalog {
    async fn search_tables(&self, _request: &SearchTablesRequest) -> Result<SearchTablesPage> {
        Ok(SearchTablesPage::new(
            vec![table("sales", "orders", 1.0), table("sales", "", 2.0)],
            None,
        ))
    }
}

fn read_records(path: &std::path::Path) -> Vec<TableLastUpdated> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[tokio::test]
async fn test_pipeline_writes_ndjson() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("last_updated.ndjson");

    let extractor = GlueLastUpdatedExtractor::with_client(QueryParameters::default(), TwoPageCatalog);
    let mut pipeline = Pipeline::new(
        extractor,
        IdentityTransformer::new(),
        NdjsonWriter::new(&output),
    );

    let count = pipeline.run().await.unwrap();
    assert_eq!(count, 3);

    let records = read_records(&output);
    let names: Vec<_> = records.iter().map(|r| r.table_name.as_str()).collect();
    assert_eq!(names, vec!["orders", "customers", "ledger"]);
    assert_eq!(records[2].schema, "finance");
    assert_eq!(records[2].last_updated_epoch_seconds, 1710000000);
    assert!(records.iter().all(|r| r.db == "glue" && r.cluster == "gold"));

    // The scan is single-use
    let mut extractor = pipeline.into_extractor();
    assert_eq!(extractor.extract().await.unwrap(), None);
}

#[tokio::test]
async fn test_malformed_entry_fails_pipeline_without_output() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("last_updated.ndjson");

    let extractor = GlueLastUpdatedExtractor::with_client(QueryParameters::default(), BrokenCatalog);
    let mut pipeline = Pipeline::new(
        extractor,
        IdentityTransformer::new(),
        NdjsonWriter::new(&output),
    );

    let err = pipeline.run().await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "malformed catalog entry #1: field 'Name' is missing"
    );
    assert!(!output.exists());
}

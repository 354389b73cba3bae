//! CLI helper functions

use crate::{
    client::GlueClient,
    etl::{Extractor, IdentityTransformer, Pipeline},
    glue::{
        CatalogSearch, ExtractorOptions, GlueLastUpdatedExtractor, QueryParameters,
        TableLastUpdated,
    },
    storage::NdjsonWriter,
};
use eyre::{Context, Result};
use std::path::Path;

/// Build query parameters from an optional YAML options file and CLI overrides
///
/// The CLI `cluster` wins over the file, which wins over the defaults table.
pub fn load_query_parameters(
    config: Option<&Path>,
    cluster: Option<String>,
) -> Result<QueryParameters> {
    let mut options = match config {
        Some(path) => {
            log::info!("Loading extractor options from {}", path.display());
            ExtractorOptions::read(path)?
        }
        None => ExtractorOptions::default(),
    };

    if cluster.is_some() {
        options.cluster = cluster;
    }

    QueryParameters::resolve(options, &QueryParameters::default())
}

/// Load a Glue client from the standard AWS environment
pub async fn load_glue_client() -> Result<GlueClient> {
    GlueClient::from_env()
        .await
        .context("Failed to create Glue client")
}

/// Extract last-updated records and write them as NDJSON
///
/// Pipeline: GlueLastUpdatedExtractor → IdentityTransformer → NdjsonWriter
pub async fn extract_last_updated<C: CatalogSearch>(
    params: QueryParameters,
    client: C,
    output: &str,
) -> Result<usize> {
    let extractor = GlueLastUpdatedExtractor::with_client(params, client);
    log::info!(
        "Running {} for cluster {}",
        extractor.scope(),
        extractor.params().cluster()
    );

    let writer = NdjsonWriter::<TableLastUpdated>::from_arg(output);
    let mut pipeline = Pipeline::new(extractor, IdentityTransformer::new(), writer);

    let count = pipeline.run().await?;
    if output != "-" {
        log::info!("✓ Wrote {} record(s) to {}", count, output);
    }

    Ok(count)
}

/// Verify region, credentials and permissions with a single one-table search
pub async fn test_connection(client: &GlueClient) -> Result<usize> {
    let params = QueryParameters::resolve(
        ExtractorOptions {
            max_results: Some(1),
            ..Default::default()
        },
        &QueryParameters::default(),
    )?;

    let page = client
        .search_tables(&params.search_request())
        .await
        .with_context(|| format!("SearchTables against {} failed", client))?;

    log::info!("✓ Authorized against {}", client);
    Ok(page.table_list.len())
}

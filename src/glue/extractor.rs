//! Glue last-updated extractor
//!
//! Searches the Glue catalog via SearchTables and yields one
//! [`TableLastUpdated`] record per table.

use super::{
    CatalogEntry, CatalogSearch, ExtractorOptions, LastUpdatedProjection, QueryParameters,
    TableLastUpdated,
};
use crate::client::GlueClient;
use crate::etl::{Extractor, Transformer};
use aws_sdk_glue::types::Table;
use eyre::{Context, Result};

/// Scope string reported by [`GlueLastUpdatedExtractor::scope`]
pub const SCOPE: &str = "extractor.glue";

enum ScanState {
    /// No scan has started yet
    Idle,
    /// Every page has been fetched; entries are projected as they are pulled
    Active(std::iter::Enumerate<std::vec::IntoIter<Table>>),
    /// Drained or failed. Never re-queries the catalog.
    Exhausted,
}

/// Extractor for per-table last-updated times from the Glue catalog
///
/// The first call to [`extract`](Extractor::extract) fetches every page of
/// SearchTables results into memory. Later calls project one entry each and
/// do no I/O. The scan runs once: after it is drained, or after any error,
/// `extract` keeps returning `Ok(None)`.
///
/// # Example
/// ```no_run
/// use glue_last_updated::etl::Extractor;
/// use glue_last_updated::glue::{ExtractorOptions, GlueLastUpdatedExtractor, QueryParameters};
///
/// # async fn example() -> eyre::Result<()> {
/// let mut extractor =
///     GlueLastUpdatedExtractor::configure(ExtractorOptions::default(), &QueryParameters::default())
///         .await?;
///
/// while let Some(record) = extractor.extract().await? {
///     println!("{}", record);
/// }
/// # Ok(())
/// # }
/// ```
pub struct GlueLastUpdatedExtractor<C = GlueClient> {
    client: C,
    params: QueryParameters,
    projection: LastUpdatedProjection,
    state: ScanState,
}

impl GlueLastUpdatedExtractor<GlueClient> {
    /// Resolve `options` against `defaults` and connect a [`GlueClient`]
    /// configured from the standard AWS environment.
    ///
    /// # Errors
    /// Returns an error if the options are invalid or the client cannot be
    /// created (no region, bad endpoint override).
    pub async fn configure(options: ExtractorOptions, defaults: &QueryParameters) -> Result<Self> {
        let params = QueryParameters::resolve(options, defaults)?;
        let client = GlueClient::from_env()
            .await
            .context("Failed to create Glue client")?;
        Ok(Self::with_client(params, client))
    }
}

impl<C: CatalogSearch> GlueLastUpdatedExtractor<C> {
    /// Create an extractor around any catalog implementation
    pub fn with_client(params: QueryParameters, client: C) -> Self {
        let projection = LastUpdatedProjection::new(params.cluster());
        Self {
            client,
            params,
            projection,
            state: ScanState::Idle,
        }
    }

    pub fn params(&self) -> &QueryParameters {
        &self.params
    }

    /// Fetch every page of matching tables, following `NextToken`
    async fn search_all_tables(&self) -> Result<Vec<Table>> {
        let mut request = self.params.search_request();
        let mut tables = Vec::new();
        let mut pages = 0usize;

        loop {
            log::debug!(
                "Requesting SearchTables page {}{}",
                pages + 1,
                if self.params.filters().is_some() {
                    " (filtered)"
                } else {
                    ""
                }
            );

            let page = self
                .client
                .search_tables(&request)
                .await
                .with_context(|| format!("SearchTables failed on page {}", pages + 1))?;
            pages += 1;

            log::debug!("Page {} returned {} table(s)", pages, page.table_list.len());
            tables.extend(page.table_list);

            match page.next_token {
                Some(token) => request.next_token = Some(token),
                None => break,
            }
        }

        log::info!(
            "Fetched {} table(s) from Glue in {} page(s)",
            tables.len(),
            pages
        );

        Ok(tables)
    }
}

impl<C: CatalogSearch> Extractor for GlueLastUpdatedExtractor<C> {
    type Item = TableLastUpdated;

    async fn extract(&mut self) -> Result<Option<Self::Item>> {
        if let ScanState::Idle = self.state {
            // A failed sweep leaves the scan exhausted
            self.state = ScanState::Exhausted;
            let tables = self.search_all_tables().await?;
            self.state = ScanState::Active(tables.into_iter().enumerate());
        }

        let ScanState::Active(entries) = &mut self.state else {
            return Ok(None);
        };

        let Some((index, table)) = entries.next() else {
            log::debug!("Glue scan exhausted");
            self.state = ScanState::Exhausted;
            return Ok(None);
        };

        match CatalogEntry::from_table(index, &table) {
            Ok(entry) => self.projection.transform(entry).map(Some),
            Err(e) => {
                self.state = ScanState::Exhausted;
                Err(e.into())
            }
        }
    }

    fn scope(&self) -> &'static str {
        SCOPE
    }
}

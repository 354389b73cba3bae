//! Extractor options and their resolution against a defaults table
//!
//! Options can come from a YAML file:
//! ```yaml
//! cluster: gold
//! filters:
//!   - Key: DatabaseName
//!     Value: sales
//!     Comparator: EQUALS
//! max_results: 100
//! ```

use super::{PropertyPredicate, SearchTablesRequest};
use crate::error::GlueError;
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CLUSTER: &str = "gold";

/// Largest page size SearchTables accepts
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Caller-supplied options. Unset fields fall back to the defaults table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ExtractorOptions {
    /// Logical cluster label stamped on every record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// Server-side filters, sent verbatim as `Filters`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<PropertyPredicate>>,
    /// Catalog to search when it is not the caller's account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    /// Page size hint for each SearchTables call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
}

impl ExtractorOptions {
    /// Read options from a YAML file
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!(
                "Failed to read extractor options: {}",
                path.as_ref().display()
            )
        })?;

        let options: Self = serde_yaml::from_str(&content)
            .with_context(|| "Failed to parse extractor options YAML")?;

        Ok(options)
    }
}

/// Resolved query parameters for one extractor
#[derive(Debug, Clone, PartialEq)]
pub struct QueryParameters {
    cluster: String,
    filters: Option<Vec<PropertyPredicate>>,
    catalog_id: Option<String>,
    max_results: Option<u32>,
}

impl Default for QueryParameters {
    fn default() -> Self {
        Self {
            cluster: DEFAULT_CLUSTER.to_string(),
            filters: None,
            catalog_id: None,
            max_results: None,
        }
    }
}

impl QueryParameters {
    /// Layer `options` over `defaults` and validate the result
    ///
    /// # Errors
    /// Returns [`GlueError::Config`] for an empty cluster label or a page
    /// size outside `1..=1000`.
    pub fn resolve(options: ExtractorOptions, defaults: &QueryParameters) -> Result<Self> {
        let params = Self {
            cluster: options.cluster.unwrap_or_else(|| defaults.cluster.clone()),
            filters: options.filters.or_else(|| defaults.filters.clone()),
            catalog_id: options.catalog_id.or_else(|| defaults.catalog_id.clone()),
            max_results: options.max_results.or(defaults.max_results),
        };

        if params.cluster.trim().is_empty() {
            return Err(GlueError::Config("cluster cannot be empty".to_string()).into());
        }
        if let Some(max) = params.max_results
            && !(1..=MAX_PAGE_SIZE).contains(&max)
        {
            return Err(GlueError::Config(format!(
                "max_results must be between 1 and {}, got {}",
                MAX_PAGE_SIZE, max
            ))
            .into());
        }

        Ok(params)
    }

    pub fn cluster(&self) -> &str {
        &self.cluster
    }

    pub fn filters(&self) -> Option<&[PropertyPredicate]> {
        self.filters.as_deref()
    }

    pub fn catalog_id(&self) -> Option<&str> {
        self.catalog_id.as_deref()
    }

    pub fn max_results(&self) -> Option<u32> {
        self.max_results
    }

    /// The first-page request of a scan
    pub fn search_request(&self) -> SearchTablesRequest {
        SearchTablesRequest {
            catalog_id: self.catalog_id.clone(),
            filters: self.filters.clone(),
            max_results: self.max_results,
            next_token: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glue::Comparator;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let params =
            QueryParameters::resolve(ExtractorOptions::default(), &QueryParameters::default())
                .unwrap();
        assert_eq!(params.cluster(), "gold");
        assert_eq!(params.filters(), None);
        assert_eq!(params.search_request(), SearchTablesRequest::default());
    }

    #[test]
    fn test_options_override_defaults() {
        let defaults = QueryParameters::resolve(
            ExtractorOptions {
                cluster: Some("bronze".to_string()),
                max_results: Some(50),
                ..Default::default()
            },
            &QueryParameters::default(),
        )
        .unwrap();

        let options = ExtractorOptions {
            cluster: Some("silver".to_string()),
            filters: Some(vec![PropertyPredicate::equals("DatabaseName", "sales")]),
            ..Default::default()
        };
        let params = QueryParameters::resolve(options, &defaults).unwrap();

        assert_eq!(params.cluster(), "silver");
        assert_eq!(params.max_results(), Some(50));
        assert_eq!(params.filters().map(|f| f.len()), Some(1));
    }

    #[test]
    fn test_empty_filter_list_is_kept() {
        let options = ExtractorOptions {
            filters: Some(vec![]),
            ..Default::default()
        };
        let params = QueryParameters::resolve(options, &QueryParameters::default()).unwrap();
        assert_eq!(params.search_request().filters, Some(vec![]));
    }

    #[test]
    fn test_rejects_invalid_values() {
        let empty_cluster = ExtractorOptions {
            cluster: Some("".to_string()),
            ..Default::default()
        };
        assert!(QueryParameters::resolve(empty_cluster, &QueryParameters::default()).is_err());

        let page_too_big = ExtractorOptions {
            max_results: Some(5000),
            ..Default::default()
        };
        let err = QueryParameters::resolve(page_too_big, &QueryParameters::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GlueError>(),
            Some(GlueError::Config(_))
        ));
    }

    #[test]
    fn test_read_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("glue.yml");
        std::fs::write(
            &path,
            "cluster: prod\nfilters:\n  - Key: DatabaseName\n    Value: sales\n    Comparator: EQUALS\ncatalog_id: \"123456789012\"\n",
        )
        .unwrap();

        let options = ExtractorOptions::read(&path).unwrap();
        assert_eq!(options.cluster.as_deref(), Some("prod"));
        assert_eq!(options.catalog_id.as_deref(), Some("123456789012"));
        let filters = options.filters.unwrap();
        assert_eq!(filters[0].comparator, Some(Comparator::Equals));
    }

    #[test]
    fn test_read_yaml_rejects_unknown_keys() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("glue.yml");
        std::fs::write(&path, "cluster: prod\nfilter: []\n").unwrap();

        assert!(ExtractorOptions::read(&path).is_err());
    }
}

//! SearchTables request and response shapes, and the seam to the remote catalog

use crate::error::GlueError;
use aws_sdk_glue::operation::search_tables::SearchTablesOutput;
use aws_sdk_glue::types::{self as sdk, Table};
use eyre::Result;
use serde::{Deserialize, Serialize};

/// Comparison operator of a Glue search filter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Comparator {
    Equals,
    GreaterThan,
    LessThan,
    GreaterThanEquals,
    LessThanEquals,
}

impl From<Comparator> for sdk::Comparator {
    fn from(comparator: Comparator) -> Self {
        match comparator {
            Comparator::Equals => sdk::Comparator::Equals,
            Comparator::GreaterThan => sdk::Comparator::GreaterThan,
            Comparator::LessThan => sdk::Comparator::LessThan,
            Comparator::GreaterThanEquals => sdk::Comparator::GreaterThanEquals,
            Comparator::LessThanEquals => sdk::Comparator::LessThanEquals,
        }
    }
}

/// One element of the SearchTables `Filters` list, sent as-is
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct PropertyPredicate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparator: Option<Comparator>,
}

impl PropertyPredicate {
    pub fn equals(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
            comparator: Some(Comparator::Equals),
        }
    }
}

impl From<&PropertyPredicate> for sdk::PropertyPredicate {
    fn from(predicate: &PropertyPredicate) -> Self {
        sdk::PropertyPredicate::builder()
            .set_key(predicate.key.clone())
            .set_value(predicate.value.clone())
            .set_comparator(predicate.comparator.map(Into::into))
            .build()
    }
}

/// Parameters of one SearchTables call. Unset fields are not sent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchTablesRequest {
    pub catalog_id: Option<String>,
    pub filters: Option<Vec<PropertyPredicate>>,
    pub max_results: Option<u32>,
    pub next_token: Option<String>,
}

/// One page of SearchTables results
///
/// Entries are kept exactly as Glue returned them; the extractor reads the
/// fields it needs when it projects each one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchTablesPage {
    pub table_list: Vec<Table>,
    pub next_token: Option<String>,
}

impl SearchTablesPage {
    pub fn new(table_list: Vec<Table>, next_token: Option<String>) -> Self {
        Self {
            table_list,
            next_token,
        }
    }

    /// Convert an SDK SearchTables output.
    ///
    /// A token, when present, always means another page follows.
    pub fn from_output(output: SearchTablesOutput) -> Result<Self, GlueError> {
        let table_list = output.table_list.ok_or_else(|| {
            GlueError::MalformedResponse("TableList is missing".to_string())
        })?;

        Ok(Self::new(table_list, output.next_token))
    }
}

/// Remote catalog that can answer SearchTables calls
///
/// [`GlueClient`](crate::client::GlueClient) is the production implementation.
pub trait CatalogSearch: Send + Sync {
    /// Fetch one page of tables matching `request`
    ///
    /// # Errors
    /// Returns an error on transport failure, a non-success response, or a
    /// response that cannot be parsed.
    fn search_tables(
        &self,
        request: &SearchTablesRequest,
    ) -> impl std::future::Future<Output = Result<SearchTablesPage>> + Send;
}

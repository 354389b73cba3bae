//! Glue client module
//!
//! Provides `GlueClient`, a thin wrapper around the AWS SDK Glue client that
//! answers [`CatalogSearch`] calls.

use crate::error::GlueError;
use crate::glue::{CatalogSearch, SearchTablesPage, SearchTablesRequest};
use aws_config::BehaviorVersion;
use aws_config::retry::RetryConfig;
use aws_sdk_glue::config::http::HttpResponse;
use aws_sdk_glue::config::{Credentials, Region};
use aws_sdk_glue::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_glue::operation::search_tables::SearchTablesError;
use aws_sdk_glue::types::PropertyPredicate;
use eyre::{Context, Result, eyre};
use url::Url;

/// Environment variable that points the client at another endpoint
pub const ENDPOINT_VAR: &str = "GLUE_ENDPOINT_URL";

/// Glue client for making API requests.
///
/// Requests are sent once; SDK retries are disabled.
///
/// # Example
/// ```no_run
/// use glue_last_updated::client::{Credentials, GlueClient};
///
/// # fn example() -> eyre::Result<()> {
/// let credentials = Credentials::new("AKID", "secret", None, None, "static");
/// let endpoint = url::Url::parse("http://localhost:4566")?;
/// let client = GlueClient::with_credentials("eu-west-1", credentials, Some(endpoint))?;
/// assert_eq!(client.region(), "eu-west-1");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct GlueClient {
    client: aws_sdk_glue::Client,
    region: String,
    endpoint: Option<Url>,
}

impl GlueClient {
    /// Create a client from the standard AWS environment.
    ///
    /// Region and credentials come from the aws-config default chain
    /// (`AWS_REGION`, `AWS_ACCESS_KEY_ID`, `AWS_PROFILE`, instance roles, ...).
    /// `GLUE_ENDPOINT_URL` optionally overrides the endpoint.
    ///
    /// # Errors
    /// Returns an error if no region is configured or the endpoint override
    /// is not a valid URL.
    pub async fn from_env() -> Result<Self> {
        let endpoint = match std::env::var(ENDPOINT_VAR) {
            Ok(raw) => Some(parse_endpoint(&raw)?),
            Err(_) => None,
        };

        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).retry_config(RetryConfig::disabled());
        if let Some(url) = &endpoint {
            loader = loader.endpoint_url(endpoint_str(url));
        }
        let sdk_config = loader.load().await;

        let region = sdk_config
            .region()
            .map(ToString::to_string)
            .ok_or_else(|| {
                GlueError::Config(
                    "no AWS region configured (set AWS_REGION or a profile region)".to_string(),
                )
            })?;
        log::debug!("Using Glue in {}", region);

        Ok(Self {
            client: aws_sdk_glue::Client::new(&sdk_config),
            region,
            endpoint,
        })
    }

    /// Create a client with fixed credentials.
    ///
    /// # Arguments
    /// * `region` - AWS region, used for the default endpoint and for signing
    /// * `credentials` - Static credentials to sign with
    /// * `endpoint` - Optional endpoint override (e.g. a local Glue emulator)
    ///
    /// # Errors
    /// Returns an error if the region is empty.
    pub fn with_credentials(
        region: impl Into<String>,
        credentials: Credentials,
        endpoint: Option<Url>,
    ) -> Result<Self> {
        let region = region.into();
        if region.trim().is_empty() {
            return Err(GlueError::Config("region cannot be empty".to_string()).into());
        }

        let mut config = aws_sdk_glue::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(region.clone()))
            .credentials_provider(credentials)
            .retry_config(RetryConfig::disabled());
        if let Some(url) = &endpoint {
            config = config.endpoint_url(endpoint_str(url));
        }

        Ok(Self {
            client: aws_sdk_glue::Client::from_conf(config.build()),
            region,
            endpoint,
        })
    }

    /// Get the region.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Get the endpoint override, if any.
    pub fn endpoint(&self) -> Option<&Url> {
        self.endpoint.as_ref()
    }
}

impl CatalogSearch for GlueClient {
    async fn search_tables(&self, request: &SearchTablesRequest) -> Result<SearchTablesPage> {
        let filters: Option<Vec<PropertyPredicate>> = request
            .filters
            .as_ref()
            .map(|filters| filters.iter().map(PropertyPredicate::from).collect());
        let max_results = request
            .max_results
            .map(i32::try_from)
            .transpose()
            .context("MaxResults does not fit the SearchTables request")?;

        log::trace!("SearchTables against {}", self);
        let output = self
            .client
            .search_tables()
            .set_catalog_id(request.catalog_id.clone())
            .set_filters(filters)
            .set_max_results(max_results)
            .set_next_token(request.next_token.clone())
            .send()
            .await
            .map_err(search_error)?;

        Ok(SearchTablesPage::from_output(output)?)
    }
}

/// Service errors become [`GlueError::Api`]; anything else (no connection,
/// credentials, timeouts) keeps the SDK's description.
fn search_error(err: SdkError<SearchTablesError, HttpResponse>) -> eyre::Report {
    match err {
        SdkError::ServiceError(service) => {
            let status = service.raw().status().as_u16();
            let err = service.err();
            GlueError::Api {
                status,
                kind: err.code().unwrap_or("UnknownError").to_string(),
                message: err.message().unwrap_or_default().to_string(),
            }
            .into()
        }
        other => eyre!("Failed to send request: {}", DisplayErrorContext(&other)),
    }
}

fn parse_endpoint(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).with_context(|| format!("Invalid {}: {}", ENDPOINT_VAR, raw))?;
    if url.host_str().is_none() {
        return Err(GlueError::Config(format!("{} has no host: {}", ENDPOINT_VAR, raw)).into());
    }
    Ok(url)
}

/// The SDK appends the operation path itself
fn endpoint_str(url: &Url) -> &str {
    url.as_str().trim_end_matches('/')
}

impl std::fmt::Display for GlueClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.endpoint {
            Some(url) => write!(f, "{} (region: {})", url, self.region),
            None => write!(f, "Glue (region: {})", self.region),
        }
    }
}

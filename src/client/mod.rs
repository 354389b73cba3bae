//! AWS Glue API client.
//!
//! This module provides the [`GlueClient`] that answers SearchTables calls
//! through the AWS SDK. [`Credentials`] is the SDK's static credential type,
//! re-exported for callers that do not use the default provider chain.

mod glue;

pub use aws_sdk_glue::config::Credentials;
pub use glue::{ENDPOINT_VAR, GlueClient};

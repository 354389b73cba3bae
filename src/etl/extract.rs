//! Extractor trait for pulling records from a source one at a time

use eyre::Result;

/// Extractor trait for pulling records from a source
///
/// Each call to [`extract`](Extractor::extract) hands back at most one item.
/// `Ok(None)` is the exhausted sentinel: once returned, every later call
/// returns it again without touching the source. Errors are never reported
/// through `None`.
///
/// # Example
/// ```no_run
/// use glue_last_updated::etl::Extractor;
/// use eyre::Result;
///
/// struct Countdown(u32);
///
/// impl Extractor for Countdown {
///     type Item = u32;
///
///     async fn extract(&mut self) -> Result<Option<Self::Item>> {
///         if self.0 == 0 {
///             return Ok(None);
///         }
///         self.0 -= 1;
///         Ok(Some(self.0))
///     }
///
///     fn scope(&self) -> &'static str {
///         "extractor.countdown"
///     }
/// }
/// ```
pub trait Extractor: Send {
    /// The type of items extracted
    type Item: Send;

    /// Pull the next item from the source
    ///
    /// # Errors
    /// Returns an error if extraction fails (network, parsing, malformed data).
    fn extract(&mut self) -> impl std::future::Future<Output = Result<Option<Self::Item>>> + Send;

    /// Fixed scope string used for registration and logging
    fn scope(&self) -> &'static str;
}

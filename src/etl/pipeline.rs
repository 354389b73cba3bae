//! Pipeline orchestration for ETL operations

use super::{Extractor, Loader, Transformer};
use eyre::Result;

/// ETL Pipeline that drains an extractor, transforms the items and loads them
///
/// # Type Parameters
/// - `E`: Extractor type
/// - `T`: Transformer type (must transform from E::Item)
/// - `L`: Loader type (must load T::Output)
///
/// # Example
/// ```no_run
/// use glue_last_updated::etl::{IdentityTransformer, Pipeline};
/// # use glue_last_updated::etl::{Extractor, Loader};
/// # use eyre::Result;
/// # struct MyExtractor(Vec<i32>);
/// # impl Extractor for MyExtractor {
/// #     type Item = i32;
/// #     async fn extract(&mut self) -> Result<Option<Self::Item>> { Ok(self.0.pop()) }
/// #     fn scope(&self) -> &'static str { "extractor.mine" }
/// # }
/// # struct MyLoader;
/// # impl Loader for MyLoader {
/// #     type Item = i32;
/// #     async fn load(&self, items: Vec<Self::Item>) -> Result<usize> { Ok(items.len()) }
/// # }
///
/// # async fn example() -> Result<()> {
/// let mut pipeline = Pipeline::new(
///     MyExtractor(vec![1, 2, 3]),
///     IdentityTransformer::new(),
///     MyLoader,
/// );
///
/// let count = pipeline.run().await?;
/// println!("Processed {} items", count);
/// # Ok(())
/// # }
/// ```
pub struct Pipeline<E, T, L> {
    extractor: E,
    transformer: T,
    loader: L,
}

impl<E, T, L> Pipeline<E, T, L>
where
    E: Extractor,
    T: Transformer<Input = E::Item>,
    L: Loader<Item = T::Output>,
{
    /// Create a new pipeline
    pub fn new(extractor: E, transformer: T, loader: L) -> Self {
        Self {
            extractor,
            transformer,
            loader,
        }
    }

    /// Run the complete ETL pipeline
    ///
    /// Steps:
    /// 1. Pull items from the extractor until it reports exhaustion
    /// 2. Transform each item
    /// 3. Load items to destination
    ///
    /// Returns the number of items successfully loaded. The loader runs even
    /// when nothing was extracted, so a destination is always rewritten.
    ///
    /// # Errors
    /// Returns an error if any stage fails. Nothing is loaded when extraction
    /// or transformation fails.
    pub async fn run(&mut self) -> Result<usize> {
        log::info!("Starting ETL pipeline for {}", self.extractor.scope());

        // Extract
        log::debug!("Extracting from source...");
        let mut items = Vec::new();
        while let Some(item) = self.extractor.extract().await? {
            items.push(item);
        }
        log::info!("Extracted {} items", items.len());

        if items.is_empty() {
            log::warn!("No items extracted, loading an empty batch");
        }

        // Transform
        log::debug!("Transforming items...");
        let transformed = self.transformer.transform_many(items)?;
        log::info!("Transformed {} items", transformed.len());

        // Load
        log::debug!("Loading to destination...");
        let count = self.loader.load(transformed).await?;
        log::info!("Loaded {} items", count);

        Ok(count)
    }

    /// Consume the pipeline and hand back its extractor
    pub fn into_extractor(self) -> E {
        self.extractor
    }
}

//! Collection catalog assembly
//!
//! Aggregates photo collections from the source's query stages into one
//! ordered, de-duplicated list and selects the default collection.

use std::sync::Arc;

use crate::contents::CollectionContents;
use crate::dedup::unique_by_key;
use crate::models::{Collection, PickerConfig};
use crate::source::{AssetSource, CollectionStage};

/// Errors that can occur while assembling the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No non-empty collection was found
    ///
    /// The platform is assumed to always expose at least one collection
    /// with content; this surfaces that broken assumption to the caller
    /// instead of crashing.
    EmptyCatalog,
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::EmptyCatalog => {
                write!(f, "No photo collections with content are available")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Ordered, de-duplicated view over the source's photo collections
pub struct CollectionCatalog {
    source: Arc<dyn AssetSource>,
    config: PickerConfig,
}

impl CollectionCatalog {
    /// Create a new catalog over an asset source
    pub fn new(source: Arc<dyn AssetSource>, config: PickerConfig) -> Self {
        Self { source, config }
    }

    /// Lists all non-empty collections
    ///
    /// Stages are queried in fixed priority order; within the full list an
    /// identifier appears once, at the position of its first occurrence.
    pub fn list_collections(&self) -> Vec<Collection> {
        let mut raw = Vec::new();

        for stage in CollectionStage::ORDERED {
            let batch = self.source.fetch_collections(stage);
            log::debug!("Stage {:?} yielded {} collections", stage, batch.len());
            raw.extend(batch);
        }

        let listed = unique_by_key(
            raw.into_iter().filter(|collection| !collection.is_empty()),
            |collection| collection.id.clone(),
        );

        log::info!("Catalog assembled with {} collections", listed.len());
        listed
    }

    /// Returns the default ("camera roll") collection
    pub fn default_collection(&self) -> Result<Collection, CatalogError> {
        self.list_collections()
            .into_iter()
            .next()
            .ok_or(CatalogError::EmptyCatalog)
    }

    /// Title for display, falling back to the configured default
    pub fn display_title<'a>(&'a self, collection: &'a Collection) -> &'a str {
        collection.display_title(&self.config.untitled_collection_title)
    }

    /// Opens the contents of one collection
    pub fn contents_of(&self, collection: Collection) -> CollectionContents {
        CollectionContents::new(collection, Arc::clone(&self.source), self.config.clone())
    }
}

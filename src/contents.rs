//! Contents of a single collection
//!
//! Wraps one collection's asset sequence. The assets are fetched lazily on
//! first access, cached for the lifetime of the value and kept sorted
//! ascending by creation time.

use std::sync::{Arc, OnceLock};

use crate::exporter::{AttachmentExporter, ExportResult};
use crate::models::{Asset, Attachment, Collection, PickerConfig};
use crate::source::{AssetSource, ThumbnailDelivery};

/// Errors for indexed asset access
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentsError {
    /// Index outside `[0, len)`
    OutOfRange { index: usize, len: usize },
}

impl std::fmt::Display for ContentsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentsError::OutOfRange { index, len } => {
                write!(f, "Asset index {} out of range (len {})", index, len)
            }
        }
    }
}

impl std::error::Error for ContentsError {}

/// Lazily loaded view over one collection's assets
pub struct CollectionContents {
    collection: Collection,
    source: Arc<dyn AssetSource>,
    exporter: AttachmentExporter,
    assets: OnceLock<Vec<Asset>>,
}

impl CollectionContents {
    /// Create contents for a collection
    pub fn new(collection: Collection, source: Arc<dyn AssetSource>, config: PickerConfig) -> Self {
        let exporter = AttachmentExporter::new(Arc::clone(&source), config);
        Self {
            collection,
            source,
            exporter,
            assets: OnceLock::new(),
        }
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    fn assets(&self) -> &[Asset] {
        self.assets.get_or_init(|| {
            let mut assets = self.source.fetch_assets(&self.collection.id);
            assets.sort_by(|a, b| a.created_at.cmp(&b.created_at));
            log::debug!(
                "Loaded {} assets for collection {}",
                assets.len(),
                self.collection.id
            );
            assets
        })
    }

    /// Number of assets in the collection
    pub fn len(&self) -> usize {
        self.assets().len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets().is_empty()
    }

    /// Asset at `index`, in ascending creation-time order
    pub fn asset_at(&self, index: usize) -> Result<&Asset, ContentsError> {
        let assets = self.assets();
        assets.get(index).ok_or(ContentsError::OutOfRange {
            index,
            len: assets.len(),
        })
    }

    /// Requests a thumbnail without blocking
    ///
    /// The delivery callback may run zero or more times on an unspecified
    /// context; a degraded image may arrive before the final one. Callers
    /// mutating UI-owned state must marshal back onto the owning thread.
    pub fn request_thumbnail(
        &self,
        asset: &Asset,
        target_size: (u32, u32),
        deliver: ThumbnailDelivery,
    ) {
        self.source.request_thumbnail(asset, target_size, deliver);
    }

    /// Exports one asset of this collection into an attachment
    pub async fn export_attachment(&self, asset: &Asset) -> ExportResult<Attachment> {
        self.exporter.export(asset).await
    }

    /// Exports a set of selected assets concurrently, all-or-nothing
    pub async fn export_attachments(&self, assets: &[Asset]) -> ExportResult<Vec<Attachment>> {
        self.exporter.export_all(assets).await
    }
}

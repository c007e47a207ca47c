//! Asset source capability surface
//!
//! The platform photo library is modeled as an opaque capability behind the
//! [`AssetSource`] trait. Collection and asset queries are synchronous
//! blocking calls; thumbnail delivery and export run asynchronously.

use async_trait::async_trait;
use std::path::PathBuf;

use crate::models::{Asset, Collection};

/// Query stages for collection fetching, in catalog priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionStage {
    /// The single system "camera roll" style smart collection
    CameraRoll,
    /// User-created top-level albums
    UserAlbums,
    /// All other smart collections
    SmartAlbums,
}

impl CollectionStage {
    /// All stages in the order the catalog queries them
    pub const ORDERED: [CollectionStage; 3] = [
        CollectionStage::CameraRoll,
        CollectionStage::UserAlbums,
        CollectionStage::SmartAlbums,
    ];
}

/// Quality preset for video export sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportPreset {
    Low,
    Medium,
    High,
}

impl Default for ExportPreset {
    fn default() -> Self {
        ExportPreset::Medium
    }
}

/// Full-resolution image payload with its type tag
#[derive(Debug, Clone)]
pub struct ImageData {
    pub bytes: Vec<u8>,
    /// MIME/UTI-equivalent type tag, e.g. "image/jpeg"
    pub type_tag: String,
}

/// Output description for a video export session
#[derive(Debug, Clone)]
pub struct VideoOutput {
    pub path: PathBuf,
    /// Normalized container type tag, e.g. "video/mp4"
    pub container: String,
    /// Strip sharing-sensitive metadata from the output
    pub strip_metadata: bool,
}

/// Callback receiving thumbnail deliveries
///
/// The source may invoke it zero or more times with an optional image; a
/// degraded placeholder may arrive before the final image. There is no
/// ordering guarantee beyond degraded-then-final when both arrive.
pub type ThumbnailDelivery = Box<dyn FnMut(Option<Vec<u8>>) + Send>;

/// A source-provided re-encode session for one video asset
#[async_trait]
pub trait ExportSession: Send {
    /// Runs the export, writing the re-encoded video to `output.path`
    async fn export(self: Box<Self>, output: &VideoOutput) -> Result<(), String>;
}

/// Opaque capability over the platform photo library
#[async_trait]
pub trait AssetSource: Send + Sync {
    /// Collections for one query stage, in source order
    /// (ascending by end date within the stage)
    fn fetch_collections(&self, stage: CollectionStage) -> Vec<Collection>;

    /// Assets of a collection
    fn fetch_assets(&self, collection_id: &str) -> Vec<Asset>;

    /// Requests a thumbnail without blocking the caller
    fn request_thumbnail(
        &self,
        asset: &Asset,
        target_size: (u32, u32),
        deliver: ThumbnailDelivery,
    );

    /// Full-resolution image data, or `None` when unavailable
    async fn request_image_data(&self, asset: &Asset) -> Option<ImageData>;

    /// A re-encode session for a video asset, or `None` when the source
    /// cannot produce one
    async fn request_export_session(
        &self,
        asset: &Asset,
        preset: ExportPreset,
    ) -> Option<Box<dyn ExportSession>>;
}

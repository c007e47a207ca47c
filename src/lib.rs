//! # Photo Picker
//!
//! A photo library picker pipeline for outgoing message attachments.
//!
//! This crate provides the non-UI core of an in-app photo picker:
//! - Collection aggregation across the library's query stages, ordered and
//!   de-duplicated, with empty collections hidden
//! - Lazily loaded, creation-time-ordered collection contents with async
//!   thumbnail delivery
//! - Attachment export for selected images and videos, including video
//!   re-encoding into a normalized container, with concurrent
//!   all-or-nothing batch export
//! - Caption continuity keyed by asset identifier
//! - Library change notifications with explicit listener lifetime
//!
//! ## Platform Separation
//!
//! The platform photo library is an opaque capability behind the
//! [`AssetSource`] trait. The UI shell (grid layout, selection handling,
//! attachment review) stays in the application crate and consumes this
//! pipeline's output.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use photo_picker::{CollectionCatalog, PickerConfig};
//!
//! let catalog = CollectionCatalog::new(source, PickerConfig::default());
//! let contents = catalog.contents_of(catalog.default_collection()?);
//! let attachments = contents.export_attachments(&selected).await?;
//! ```

pub mod captions;
pub mod catalog;
pub mod changes;
pub mod contents;
pub mod dedup;
pub mod exporter;
pub mod models;
pub mod source;

pub use captions::CaptionStore;
pub use catalog::{CatalogError, CollectionCatalog};
pub use changes::{ChangeFeed, ChangeListener, LibraryChange, ListenerHandle};
pub use contents::{CollectionContents, ContentsError};
pub use dedup::unique_by_key;
pub use exporter::{AttachmentExporter, ExportError, ExportResult, VIDEO_CONTAINER};
pub use models::{Asset, Attachment, AttachmentPayload, Collection, MediaKind, PickerConfig};
pub use source::{
    AssetSource, CollectionStage, ExportPreset, ExportSession, ImageData, ThumbnailDelivery,
    VideoOutput,
};

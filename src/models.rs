use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::source::ExportPreset;

/// Media kind of an asset as reported by the asset source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Other,
}

impl MediaKind {
    /// Whether the attachment exporter can handle this kind
    pub fn is_exportable(&self) -> bool {
        matches!(self, MediaKind::Image | MediaKind::Video)
    }
}

/// An asset handed out by the asset source
///
/// The source owns the underlying media; this is an immutable handle
/// carrying the identity, kind and creation time used for ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub kind: MediaKind,
    pub created_at: DateTime<Utc>,
}

/// A named, ordered grouping of assets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    pub title: Option<String>,
    pub asset_count: usize,
}

impl Collection {
    /// Title for display, falling back when absent or blank
    pub fn display_title<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.title.as_deref() {
            Some(title) if !title.trim().is_empty() => title,
            _ => fallback,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.asset_count == 0
    }
}

/// Binary payload of an exported attachment
///
/// Image exports are kept in memory; video exports land in a temp file
/// that the caller deletes once the attachment is discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttachmentPayload {
    Bytes(Vec<u8>),
    TempFile(PathBuf),
}

/// Normalized outgoing attachment produced by the exporter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub payload: AttachmentPayload,
    /// MIME/UTI-equivalent type tag, e.g. "image/jpeg" or "video/mp4"
    pub type_tag: String,
    /// Identifier of the source asset, used for caption continuity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_asset_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// Configuration for the picker pipeline
#[derive(Debug, Clone)]
pub struct PickerConfig {
    /// Directory where video export output files are written
    pub temp_dir: PathBuf,
    /// Quality preset passed to video export sessions
    pub video_preset: ExportPreset,
    /// Display title used for collections without a usable title
    pub untitled_collection_title: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            temp_dir: std::env::temp_dir(),
            video_preset: ExportPreset::Medium,
            untitled_collection_title: "Photos".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_title_fallback() {
        let untitled = Collection {
            id: "c1".to_string(),
            title: None,
            asset_count: 3,
        };
        assert_eq!(untitled.display_title("Photos"), "Photos");

        let blank = Collection {
            id: "c2".to_string(),
            title: Some("   ".to_string()),
            asset_count: 3,
        };
        assert_eq!(blank.display_title("Photos"), "Photos");

        let named = Collection {
            id: "c3".to_string(),
            title: Some("Holidays".to_string()),
            asset_count: 3,
        };
        assert_eq!(named.display_title("Photos"), "Holidays");
    }

    #[test]
    fn test_media_kind_exportable() {
        assert!(MediaKind::Image.is_exportable());
        assert!(MediaKind::Video.is_exportable());
        assert!(!MediaKind::Other.is_exportable());
    }
}

//! Caption continuity across re-derived attachments
//!
//! Captions are keyed by asset identifier, not by attachment instance, so
//! re-deriving an attachment for the same asset recovers its caption. The
//! store is owned by the UI session and follows a single-writer rule:
//! mutations happen only on the thread that owns the selection state.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::Attachment;

/// Asset-identifier-keyed caption map
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionStore {
    entries: HashMap<String, String>,
}

impl CaptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or clears the caption for an asset
    ///
    /// An empty caption removes the entry; anything else overwrites it.
    pub fn set(&mut self, asset_id: &str, caption: &str) {
        if caption.is_empty() {
            self.entries.remove(asset_id);
        } else {
            self.entries
                .insert(asset_id.to_string(), caption.to_string());
        }
    }

    pub fn get(&self, asset_id: &str) -> Option<&str> {
        self.entries.get(asset_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pre-populates a re-surfaced attachment's caption from the store
    ///
    /// Also clears a stale caption when the entry has been removed since
    /// the attachment was last derived.
    pub fn apply(&self, attachment: &mut Attachment) {
        if let Some(asset_id) = attachment.source_asset_id.as_deref() {
            attachment.caption = self.get(asset_id).map(str::to_string);
        }
    }

    /// Serializes the store for session persistence
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttachmentPayload;

    fn attachment_for(asset_id: &str) -> Attachment {
        Attachment {
            payload: AttachmentPayload::Bytes(vec![1, 2, 3]),
            type_tag: "image/jpeg".to_string(),
            source_asset_id: Some(asset_id.to_string()),
            caption: None,
        }
    }

    #[test]
    fn test_caption_roundtrip() {
        let mut store = CaptionStore::new();
        store.set("asset-x", "at the beach");

        assert_eq!(store.get("asset-x"), Some("at the beach"));

        let mut attachment = attachment_for("asset-x");
        store.apply(&mut attachment);
        assert_eq!(attachment.caption.as_deref(), Some("at the beach"));
    }

    #[test]
    fn test_empty_caption_removes_entry() {
        let mut store = CaptionStore::new();
        store.set("asset-x", "draft");
        store.set("asset-x", "");

        assert_eq!(store.get("asset-x"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_apply_clears_stale_caption() {
        let mut store = CaptionStore::new();
        store.set("asset-x", "old text");

        let mut attachment = attachment_for("asset-x");
        store.apply(&mut attachment);
        assert_eq!(attachment.caption.as_deref(), Some("old text"));

        store.set("asset-x", "");
        store.apply(&mut attachment);
        assert_eq!(attachment.caption, None);
    }

    #[test]
    fn test_overwrite_keeps_latest() {
        let mut store = CaptionStore::new();
        store.set("asset-x", "first");
        store.set("asset-x", "second");

        assert_eq!(store.get("asset-x"), Some("second"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_json_persistence() {
        let mut store = CaptionStore::new();
        store.set("asset-x", "hello");

        let json = store.to_json().unwrap();
        let loaded = CaptionStore::from_json(&json).unwrap();

        assert_eq!(loaded, store);
        assert_eq!(loaded.get("asset-x"), Some("hello"));
    }
}

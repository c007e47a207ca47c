//! Attachment export for selected assets
//!
//! This module converts a platform asset (image or video) into a normalized
//! outgoing attachment. Images are fetched as full-resolution data; videos
//! are re-encoded through a source-provided export session into a fresh
//! temp file. Batch exports run concurrently with an all-or-nothing join.

use std::sync::Arc;
use uuid::Uuid;

use crate::models::{Asset, Attachment, AttachmentPayload, MediaKind, PickerConfig};
use crate::source::{AssetSource, VideoOutput};

/// Normalized container type for all video exports
pub const VIDEO_CONTAINER: &str = "video/mp4";

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors that can occur during attachment export
#[derive(Debug)]
pub enum ExportError {
    /// Asset kind is neither image nor video
    UnsupportedMediaType(MediaKind),
    /// Source returned no data or no type tag for an image (asset id)
    DataUnavailable(String),
    /// Source could not produce a video export session (asset id)
    ExportSessionUnavailable(String),
    /// The asynchronous export terminated in error
    ExportFailed(String),
    IoError(std::io::Error),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::UnsupportedMediaType(kind) => {
                write!(f, "Unsupported media type: {:?}", kind)
            }
            ExportError::DataUnavailable(id) => {
                write!(f, "Image data unavailable for asset {}", id)
            }
            ExportError::ExportSessionUnavailable(id) => {
                write!(f, "Export session unavailable for asset {}", id)
            }
            ExportError::ExportFailed(msg) => write!(f, "Export failed: {}", msg),
            ExportError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::IoError(err)
    }
}

/// Service converting assets into outgoing attachments
pub struct AttachmentExporter {
    source: Arc<dyn AssetSource>,
    config: PickerConfig,
}

impl AttachmentExporter {
    /// Create a new attachment exporter
    pub fn new(source: Arc<dyn AssetSource>, config: PickerConfig) -> Self {
        Self { source, config }
    }

    /// Exports a single asset into an attachment
    ///
    /// Dispatches on the asset's media kind; fails with
    /// [`ExportError::UnsupportedMediaType`] for kinds that are neither
    /// image nor video. Every failure is terminal, there is no retry.
    pub async fn export(&self, asset: &Asset) -> ExportResult<Attachment> {
        Self::export_single(Arc::clone(&self.source), self.config.clone(), asset.clone()).await
    }

    /// Exports a set of selected assets concurrently
    ///
    /// One export task per asset; the result order matches the input order.
    /// The batch is all-or-nothing: the first failing export fails the
    /// whole batch and no partial list is delivered. There is no timeout
    /// or cancellation beyond dropping the returned future.
    pub async fn export_all(&self, assets: &[Asset]) -> ExportResult<Vec<Attachment>> {
        use tokio::task::JoinSet;

        if assets.is_empty() {
            return Ok(Vec::new());
        }

        log::info!("Exporting batch of {} assets", assets.len());

        let mut join_set = JoinSet::new();

        for (index, asset) in assets.iter().cloned().enumerate() {
            let source = Arc::clone(&self.source);
            let config = self.config.clone();

            join_set.spawn(async move {
                let attachment = Self::export_single(source, config, asset).await?;
                Ok::<(usize, Attachment), ExportError>((index, attachment))
            });
        }

        let mut slots: Vec<Option<Attachment>> = vec![None; assets.len()];

        while let Some(joined) = join_set.join_next().await {
            let (index, attachment) = joined
                .map_err(|e| ExportError::ExportFailed(format!("Export task failed: {}", e)))??;
            slots[index] = Some(attachment);
        }

        let attachments = slots
            .into_iter()
            .map(|slot| {
                slot.ok_or_else(|| {
                    ExportError::ExportFailed("Export task vanished before completion".to_string())
                })
            })
            .collect::<ExportResult<Vec<_>>>()?;

        log::info!("Exported all {} assets", attachments.len());
        Ok(attachments)
    }

    /// Exports one asset with owned source and config, usable as a task
    async fn export_single(
        source: Arc<dyn AssetSource>,
        config: PickerConfig,
        asset: Asset,
    ) -> ExportResult<Attachment> {
        match asset.kind {
            MediaKind::Image => Self::export_image(source, &asset).await,
            MediaKind::Video => Self::export_video(source, &config, &asset).await,
            MediaKind::Other => Err(ExportError::UnsupportedMediaType(asset.kind)),
        }
    }

    async fn export_image(source: Arc<dyn AssetSource>, asset: &Asset) -> ExportResult<Attachment> {
        log::debug!("Exporting image asset {}", asset.id);

        let data = source
            .request_image_data(asset)
            .await
            .ok_or_else(|| ExportError::DataUnavailable(asset.id.clone()))?;

        if data.bytes.is_empty() || data.type_tag.is_empty() {
            return Err(ExportError::DataUnavailable(asset.id.clone()));
        }

        Ok(Attachment {
            payload: AttachmentPayload::Bytes(data.bytes),
            type_tag: data.type_tag,
            source_asset_id: Some(asset.id.clone()),
            caption: None,
        })
    }

    async fn export_video(
        source: Arc<dyn AssetSource>,
        config: &PickerConfig,
        asset: &Asset,
    ) -> ExportResult<Attachment> {
        log::debug!("Exporting video asset {}", asset.id);

        let session = source
            .request_export_session(asset, config.video_preset)
            .await
            .ok_or_else(|| ExportError::ExportSessionUnavailable(asset.id.clone()))?;

        // Fresh temp file per export; the caller owns deletion once the
        // attachment is discarded.
        let output_path = config.temp_dir.join(format!("{}.mp4", Uuid::new_v4()));
        let output = VideoOutput {
            path: output_path.clone(),
            container: VIDEO_CONTAINER.to_string(),
            strip_metadata: true,
        };

        session.export(&output).await.map_err(|e| {
            log::error!("Video export failed for asset {}: {}", asset.id, e);
            ExportError::ExportFailed(e)
        })?;

        log::debug!("Video export written to {:?}", output_path);

        Ok(Attachment {
            payload: AttachmentPayload::TempFile(output_path),
            type_tag: VIDEO_CONTAINER.to_string(),
            source_asset_id: Some(asset.id.clone()),
            caption: None,
        })
    }
}

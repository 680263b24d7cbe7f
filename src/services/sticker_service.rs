//! Sticker commands
//!
//! Upload is accepted and validated but not stored yet, so every call
//! reports failure without a cause.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{Result, StickerboardError};

/// Payload of the upload command: the logical board position to drop the sticker at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UploadStickerInput {
    pub x: f64,
    pub y: f64,
}

impl UploadStickerInput {
    pub fn validate(&self) -> Result<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(StickerboardError::validation(
                "x and y must be finite numbers",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadStickerOutput {
    pub success: bool,
}

#[derive(Debug, Clone, Default)]
pub struct StickerService;

impl StickerService {
    pub fn new() -> Self {
        Self
    }

    pub async fn upload_sticker(&self, input: UploadStickerInput) -> Result<UploadStickerOutput> {
        input.validate()?;
        info!(x = input.x, y = input.y, "upload_sticker received");
        // storage not wired up yet
        Ok(UploadStickerOutput { success: false })
    }
}

//! Service layer for business logic
//!
//! Shared by the HTTP handlers; kept free of actix types so it can be
//! exercised directly in tests.

mod image_catalog;
mod sticker_service;

pub use image_catalog::{ImageCatalog, StaticImageCatalog};
pub use sticker_service::{StickerService, UploadStickerInput, UploadStickerOutput};

//! Image catalog
//!
//! Source of the images shown when the board first loads. Only the static
//! seed list exists today; PocketBase-backed catalogs plug in behind the same
//! trait.

use async_trait::async_trait;

use crate::errors::Result;
use crate::image::{StoredImage, seed_images};

#[async_trait]
pub trait ImageCatalog: Send + Sync {
    /// Images to place on the board at page load, in draw order.
    async fn initial_images(&self) -> Result<Vec<StoredImage>>;

    fn name(&self) -> &'static str;
}

/// Fixed list, returned unchanged on every call.
#[derive(Debug, Clone)]
pub struct StaticImageCatalog {
    images: Vec<StoredImage>,
}

impl StaticImageCatalog {
    pub fn new(images: Vec<StoredImage>) -> Self {
        Self { images }
    }
}

impl Default for StaticImageCatalog {
    fn default() -> Self {
        Self::new(seed_images())
    }
}

#[async_trait]
impl ImageCatalog for StaticImageCatalog {
    async fn initial_images(&self) -> Result<Vec<StoredImage>> {
        Ok(self.images.clone())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_catalog_is_stable() {
        let catalog = StaticImageCatalog::default();
        let first = catalog.initial_images().await.unwrap();
        let second = catalog.initial_images().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first, seed_images());
        assert_eq!(catalog.name(), "static");
    }
}

//! Canvas coordinate model
//!
//! Two coordinate spaces are in play:
//! - logical: unscaled pixels shared with [`StoredImage`](crate::image::StoredImage)
//!   and [`UserViewport`]
//! - local: device pixels on the canvas element, relative to the viewport
//!   origin and multiplied by the [`DevicePixelRatio`]

mod geometry;
mod local_image;
mod scene;

pub use geometry::{DevicePixelRatio, Rect, UserViewport};
pub use local_image::LocalImageData;
pub use scene::{CanvasScene, Layer};

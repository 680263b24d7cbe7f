use super::geometry::{DevicePixelRatio, Rect, UserViewport};
use crate::image::StoredImage;

/// Client-side render state of one image.
///
/// `I` is the image handle (an `HtmlImageElement` in the browser, anything in
/// tests). Geometry exists only once the handle has finished loading, and is
/// expressed in canvas-local device pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum LocalImageData<I> {
    Unloaded {
        img: I,
    },
    Loaded {
        img: I,
        local_x: f64,
        local_y: f64,
        width: f64,
        height: f64,
        is_selected: bool,
    },
}

impl<I> LocalImageData<I> {
    pub fn new(img: I) -> Self {
        LocalImageData::Unloaded { img }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LocalImageData::Loaded { .. })
    }

    pub fn img(&self) -> &I {
        match self {
            LocalImageData::Unloaded { img } | LocalImageData::Loaded { img, .. } => img,
        }
    }

    /// Compute (or recompute) render geometry for `image` as seen through
    /// `viewport`. The selection flag survives relayout.
    pub fn load(self, image: &StoredImage, viewport: &UserViewport, dpr: DevicePixelRatio) -> Self {
        let (is_selected, img) = match self {
            LocalImageData::Unloaded { img } => (false, img),
            LocalImageData::Loaded {
                img, is_selected, ..
            } => (is_selected, img),
        };
        let (local_x, local_y) = viewport.to_local(image.x, image.y, dpr);
        LocalImageData::Loaded {
            img,
            local_x,
            local_y,
            width: dpr.scale(image.width),
            height: dpr.scale(image.height),
            is_selected,
        }
    }

    /// Render rectangle in local device pixels, `None` until loaded.
    pub fn bounds(&self) -> Option<Rect> {
        match *self {
            LocalImageData::Unloaded { .. } => None,
            LocalImageData::Loaded {
                local_x,
                local_y,
                width,
                height,
                ..
            } => Some(Rect::new(local_x, local_y, width, height)),
        }
    }

    pub fn contains_local(&self, local_x: f64, local_y: f64) -> bool {
        self.bounds()
            .is_some_and(|rect| rect.contains(local_x, local_y))
    }

    pub fn is_selected(&self) -> bool {
        matches!(
            self,
            LocalImageData::Loaded {
                is_selected: true,
                ..
            }
        )
    }

    /// Returns false when the image is not loaded yet; nothing is recorded.
    pub fn set_selected(&mut self, selected: bool) -> bool {
        match self {
            LocalImageData::Unloaded { .. } => false,
            LocalImageData::Loaded { is_selected, .. } => {
                *is_selected = selected;
                true
            }
        }
    }
}

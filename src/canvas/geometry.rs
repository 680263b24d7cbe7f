use serde::{Deserialize, Serialize};

use crate::errors::{Result, StickerboardError};
use crate::image::StoredImage;

/// Axis-aligned rectangle, half-open on the right and bottom edges.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Touching edges do not count as overlap.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

impl From<&StoredImage> for Rect {
    fn from(image: &StoredImage) -> Self {
        Rect::new(image.x, image.y, image.width, image.height)
    }
}

/// Device pixels per logical pixel (`window.devicePixelRatio` on the client).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct DevicePixelRatio(f64);

impl DevicePixelRatio {
    pub fn new(ratio: f64) -> Result<Self> {
        if ratio.is_finite() && ratio > 0.0 {
            Ok(Self(ratio))
        } else {
            Err(StickerboardError::validation(format!(
                "Device pixel ratio must be a positive finite number, got {}",
                ratio
            )))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// Logical -> device pixels
    pub fn scale(self, logical: f64) -> f64 {
        logical * self.0
    }

    /// Device -> logical pixels
    pub fn unscale(self, device: f64) -> f64 {
        device / self.0
    }
}

impl Default for DevicePixelRatio {
    fn default() -> Self {
        Self(1.0)
    }
}

impl TryFrom<f64> for DevicePixelRatio {
    type Error = StickerboardError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<DevicePixelRatio> for f64 {
    fn from(ratio: DevicePixelRatio) -> Self {
        ratio.0
    }
}

/// The visible region of the board in logical coordinates.
///
/// Lives in the same space as [`StoredImage`]; never holds DPR-scaled values.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UserViewport {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl UserViewport {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a viewport at the given logical offset from a canvas size
    /// measured in device pixels.
    pub fn from_device(
        x: f64,
        y: f64,
        device_width: f64,
        device_height: f64,
        dpr: DevicePixelRatio,
    ) -> Self {
        Self::new(x, y, dpr.unscale(device_width), dpr.unscale(device_height))
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Move the viewport so the logical point sits at its center.
    pub fn center_on(&mut self, x: f64, y: f64) {
        self.x = x - self.width / 2.0;
        self.y = y - self.height / 2.0;
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.rect().contains(x, y)
    }

    pub fn intersects(&self, image: &StoredImage) -> bool {
        self.rect().intersects(&Rect::from(image))
    }

    /// Logical board point -> canvas-local device pixels.
    pub fn to_local(&self, x: f64, y: f64, dpr: DevicePixelRatio) -> (f64, f64) {
        (dpr.scale(x - self.x), dpr.scale(y - self.y))
    }

    /// Canvas-local device pixels -> logical board point.
    pub fn from_local(&self, local_x: f64, local_y: f64, dpr: DevicePixelRatio) -> (f64, f64) {
        (dpr.unscale(local_x) + self.x, dpr.unscale(local_y) + self.y)
    }
}

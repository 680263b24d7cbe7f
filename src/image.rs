//! Persisted image records
//!
//! `StoredImage` is the shape shared between the server and the canvas
//! client. Coordinates and sizes are logical (unscaled) pixels.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter};

/// 图片类型
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ImageKind {
    /// User-placed decoration
    Sticker,
    /// Fixed board image, not owned by any user
    Logo,
}

impl std::fmt::Display for ImageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl std::str::FromStr for ImageKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sticker" => Ok(Self::Sticker),
            "logo" => Ok(Self::Logo),
            _ => Err(format!("Invalid image type: '{}'. Valid: sticker, logo", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredImage {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub src: String,
    pub width: f64,
    pub height: f64,
    #[serde(rename = "type")]
    pub kind: ImageKind,
}

impl StoredImage {
    pub fn is_sticker(&self) -> bool {
        self.kind == ImageKind::Sticker
    }

    /// Logical right edge (exclusive)
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Logical bottom edge (exclusive)
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

const PLACEHOLDER_SRC: &str = "/logo.png";
const PLACEHOLDER_SIZE: f64 = 100.0;

fn placeholder(id: &str, x: f64, y: f64, kind: ImageKind) -> StoredImage {
    StoredImage {
        id: id.to_string(),
        x,
        y,
        src: PLACEHOLDER_SRC.to_string(),
        width: PLACEHOLDER_SIZE,
        height: PLACEHOLDER_SIZE,
        kind,
    }
}

/// The board's initial images: the logo at the origin and three test stickers
/// around it.
pub fn seed_images() -> Vec<StoredImage> {
    vec![
        placeholder("logo", 0.0, 0.0, ImageKind::Logo),
        placeholder("test-sticker", 100.0, 100.0, ImageKind::Sticker),
        placeholder("test-sticker-2", -100.0, 100.0, ImageKind::Sticker),
        placeholder("test-sticker-3", 100.0, -100.0, ImageKind::Sticker),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_serializes_under_type_key() {
        let value = serde_json::to_value(&seed_images()[0]).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "logo",
                "x": 0.0,
                "y": 0.0,
                "src": "/logo.png",
                "width": 100.0,
                "height": 100.0,
                "type": "logo"
            })
        );
    }

    #[test]
    fn test_accepts_integer_coordinates() {
        let image: StoredImage = serde_json::from_value(json!({
            "id": "s1", "x": -5, "y": 12, "src": "/a.png",
            "width": 40, "height": 30, "type": "sticker"
        }))
        .unwrap();
        assert_eq!(image.x, -5.0);
        assert!(image.is_sticker());
        assert_eq!(image.right(), 35.0);
        assert_eq!(image.bottom(), 42.0);
    }

    #[test]
    fn test_rejects_unknown_kind() {
        let result: Result<StoredImage, _> = serde_json::from_value(json!({
            "id": "s1", "x": 0, "y": 0, "src": "/a.png",
            "width": 1, "height": 1, "type": "banner"
        }));
        assert!(result.is_err());
        assert!("banner".parse::<ImageKind>().is_err());
        assert_eq!("Logo".parse::<ImageKind>(), Ok(ImageKind::Logo));
    }

    #[test]
    fn test_kind_display_parses_back() {
        use strum::IntoEnumIterator;
        for kind in ImageKind::iter() {
            assert_eq!(kind.to_string().parse::<ImageKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let images = seed_images();
        let mut ids: Vec<_> = images.iter().map(|i| i.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), images.len());
        assert_eq!(
            images.iter().filter(|i| i.kind == ImageKind::Logo).count(),
            1
        );
    }
}

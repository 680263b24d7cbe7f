use super::geometry::{DevicePixelRatio, UserViewport};
use super::local_image::LocalImageData;
use crate::image::StoredImage;

/// One drawable image: the persisted record plus its render state.
#[derive(Debug, Clone)]
pub struct Layer<I> {
    pub image: StoredImage,
    pub local: LocalImageData<I>,
}

/// Images in draw order; later layers are painted on top.
#[derive(Debug, Clone)]
pub struct CanvasScene<I> {
    layers: Vec<Layer<I>>,
    viewport: UserViewport,
    dpr: DevicePixelRatio,
}

impl<I> CanvasScene<I> {
    pub fn new(viewport: UserViewport, dpr: DevicePixelRatio) -> Self {
        Self {
            layers: Vec::new(),
            viewport,
            dpr,
        }
    }

    pub fn layers(&self) -> &[Layer<I>] {
        &self.layers
    }

    pub fn viewport(&self) -> &UserViewport {
        &self.viewport
    }

    pub fn push(&mut self, image: StoredImage, img: I) {
        self.layers.push(Layer {
            image,
            local: LocalImageData::new(img),
        });
    }

    /// Mark the layer as loaded and compute its geometry.
    /// Returns false when no layer has this id.
    pub fn mark_loaded(&mut self, id: &str) -> bool {
        if !self.layers.iter().any(|l| l.image.id == id) {
            return false;
        }
        let (viewport, dpr) = (self.viewport, self.dpr);
        self.relayout_where(|layer| layer.image.id == id, &viewport, dpr);
        true
    }

    /// Recompute geometry of every loaded layer after the viewport or ratio changed.
    pub fn layout(&mut self, viewport: UserViewport, dpr: DevicePixelRatio) {
        self.viewport = viewport;
        self.dpr = dpr;
        self.relayout_where(|layer| layer.local.is_loaded(), &viewport, dpr);
    }

    fn relayout_where<F>(&mut self, pred: F, viewport: &UserViewport, dpr: DevicePixelRatio)
    where
        F: Fn(&Layer<I>) -> bool,
    {
        self.layers = std::mem::take(&mut self.layers)
            .into_iter()
            .map(|mut layer| {
                if pred(&layer) {
                    layer.local = layer.local.load(&layer.image, viewport, dpr);
                }
                layer
            })
            .collect();
    }

    /// Ids of images overlapping the viewport, in draw order.
    pub fn visible(&self) -> Vec<&str> {
        self.layers
            .iter()
            .filter(|l| self.viewport.intersects(&l.image))
            .map(|l| l.image.id.as_str())
            .collect()
    }

    /// Topmost loaded layer under a canvas-local point.
    pub fn hit_test(&self, local_x: f64, local_y: f64) -> Option<&Layer<I>> {
        self.layers
            .iter()
            .rev()
            .find(|l| l.local.contains_local(local_x, local_y))
    }

    /// Select the sticker under the point and clear every other selection.
    ///
    /// Logos are never selectable; a click on one clears the selection.
    pub fn select_at(&mut self, local_x: f64, local_y: f64) -> Option<&str> {
        let hit = self
            .layers
            .iter()
            .rposition(|l| l.local.contains_local(local_x, local_y))
            .filter(|&i| self.layers[i].image.is_sticker());

        for (i, layer) in self.layers.iter_mut().enumerate() {
            layer.local.set_selected(Some(i) == hit);
        }
        hit.map(|i| self.layers[i].image.id.as_str())
    }

    pub fn selected(&self) -> Option<&StoredImage> {
        self.layers
            .iter()
            .find(|l| l.local.is_selected())
            .map(|l| &l.image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{ImageKind, StoredImage, seed_images};

    fn scene_with_seed() -> CanvasScene<usize> {
        let mut scene = CanvasScene::new(
            UserViewport::new(-200.0, -200.0, 400.0, 400.0),
            DevicePixelRatio::default(),
        );
        for (i, image) in seed_images().into_iter().enumerate() {
            scene.push(image, i);
        }
        scene
    }

    #[test]
    fn test_unloaded_layers_are_not_hit() {
        let scene = scene_with_seed();
        // logo occupies local 200..300
        assert!(scene.hit_test(250.0, 250.0).is_none());
    }

    #[test]
    fn test_mark_loaded_unknown_id() {
        let mut scene = scene_with_seed();
        assert!(!scene.mark_loaded("missing"));
    }

    #[test]
    fn test_hit_test_prefers_topmost_layer() {
        let mut scene = scene_with_seed();
        scene.push(
            StoredImage {
                id: "overlap".to_string(),
                x: 50.0,
                y: 50.0,
                src: "/logo.png".to_string(),
                width: 100.0,
                height: 100.0,
                kind: ImageKind::Sticker,
            },
            99,
        );
        for id in ["logo", "overlap"] {
            assert!(scene.mark_loaded(id));
        }

        // (260, 260) local is (60, 60) logical: inside both logo and overlap
        let hit = scene.hit_test(260.0, 260.0).unwrap();
        assert_eq!(hit.image.id, "overlap");
        assert_eq!(*hit.local.img(), 99);

        let hit = scene.hit_test(210.0, 210.0).unwrap();
        assert_eq!(hit.image.id, "logo");
    }

    #[test]
    fn test_select_at_is_exclusive_and_skips_logo() {
        let mut scene = scene_with_seed();
        for image in seed_images() {
            scene.mark_loaded(&image.id);
        }

        // test-sticker at logical (100,100) -> local (300,300)
        assert_eq!(scene.select_at(310.0, 310.0), Some("test-sticker"));
        assert_eq!(scene.selected().map(|i| i.id.as_str()), Some("test-sticker"));

        // test-sticker-2 at logical (-100,100) -> local (100,300)
        assert_eq!(scene.select_at(110.0, 310.0), Some("test-sticker-2"));
        let selected: Vec<_> = scene
            .layers()
            .iter()
            .filter(|l| l.local.is_selected())
            .map(|l| l.image.id.as_str())
            .collect();
        assert_eq!(selected, vec!["test-sticker-2"]);

        // the logo clears the selection
        assert_eq!(scene.select_at(210.0, 210.0), None);
        assert!(scene.selected().is_none());
    }

    #[test]
    fn test_layout_moves_only_loaded_layers() {
        let mut scene = scene_with_seed();
        scene.mark_loaded("logo");
        scene.layout(
            UserViewport::new(0.0, 0.0, 200.0, 200.0),
            DevicePixelRatio::new(2.0).unwrap(),
        );

        let logo = &scene.layers()[0];
        assert_eq!(
            logo.local.bounds().map(|r| (r.x, r.y, r.width)),
            Some((0.0, 0.0, 200.0))
        );
        assert!(!scene.layers()[1].local.is_loaded());
        assert_eq!(scene.visible(), vec!["logo", "test-sticker"]);
    }
}

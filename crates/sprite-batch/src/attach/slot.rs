use std::sync::Arc;

use crate::coords::{ColorRgba, Vec2};
use crate::scene::{AttachmentDriver, Sprite};
use crate::sort::MAX_SUB_LAYER;

/// Transform and content state of one attachment.
///
/// The transform fields are plain data: external drivers write them between
/// apply passes. `id` always equals the slot's index in the active region.
#[derive(Debug, Clone)]
pub struct AttachmentSlot {
    pub(crate) id: usize,

    pub name: String,
    pub position: Vec2,
    /// Degrees, counter-clockwise in the renderer plane.
    pub rotation: f32,
    pub scale: Vec2,
    pub shear: Vec2,
    pub color: ColorRgba,
    /// Sub-layer inside the renderer's depth slot, 0..=31.
    pub layer: u32,
    pub visible: bool,

    driver: Option<Arc<dyn AttachmentDriver>>,
    sprite: Option<Arc<Sprite>>,
    override_sprite: Option<Arc<Sprite>>,
    search_hash: i32,
}

impl AttachmentSlot {
    pub(crate) fn new() -> Self {
        Self {
            id: 0,
            name: String::new(),
            position: Vec2::zero(),
            rotation: 0.0,
            scale: Vec2::one(),
            shear: Vec2::zero(),
            color: ColorRgba::white(),
            layer: 0,
            visible: true,
            driver: None,
            sprite: None,
            override_sprite: None,
            search_hash: 0,
        }
    }

    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }

    /// Restores the default transform: identity placement, white, sub-layer 0, visible.
    pub fn reset_transform(&mut self) {
        self.position = Vec2::zero();
        self.rotation = 0.0;
        self.scale = Vec2::one();
        self.shear = Vec2::zero();
        self.color = ColorRgba::white();
        self.layer = 0;
        self.visible = true;
    }

    /// Drops every borrowed reference (driver, sprites) and the lookup keys.
    pub(crate) fn clear_links(&mut self) {
        self.driver = None;
        self.sprite = None;
        self.override_sprite = None;
        self.search_hash = 0;
        self.name.clear();
    }

    pub(crate) fn link_driver(&mut self, driver: Arc<dyn AttachmentDriver>) {
        self.name = driver.name().to_string();
        self.search_hash = driver.path_hash();
        self.driver = Some(driver);
    }

    #[inline]
    pub fn driver(&self) -> Option<&Arc<dyn AttachmentDriver>> {
        self.driver.as_ref()
    }

    #[inline]
    pub fn sprite(&self) -> Option<&Arc<Sprite>> {
        self.sprite.as_ref()
    }

    #[inline]
    pub fn set_sprite(&mut self, sprite: Option<Arc<Sprite>>) {
        self.sprite = sprite;
    }

    #[inline]
    pub fn override_sprite(&self) -> Option<&Arc<Sprite>> {
        self.override_sprite.as_ref()
    }

    /// Replaces the assigned sprite at draw time without losing it.
    #[inline]
    pub fn set_override_sprite(&mut self, sprite: Option<Arc<Sprite>>) {
        self.override_sprite = sprite;
    }

    /// Path hash used by [`find_by_path_hash`](super::AttachmentRegistry::find_by_path_hash).
    #[inline]
    pub fn search_hash(&self) -> i32 {
        self.search_hash
    }

    #[inline]
    pub fn set_search_hash(&mut self, hash: i32) {
        self.search_hash = hash;
    }

    /// Clamped sub-layer.
    #[inline]
    pub fn sub_layer(&self) -> u32 {
        self.layer.min(MAX_SUB_LAYER)
    }

    /// Sprite to draw: a valid override wins over a valid assigned sprite.
    pub fn resolved_sprite(&self) -> Option<&Arc<Sprite>> {
        match &self.override_sprite {
            Some(s) if s.is_valid() => Some(s),
            _ => self.sprite.as_ref().filter(|s| s.is_valid()),
        }
    }

    /// Whether this slot produces geometry in the next apply.
    #[inline]
    pub fn is_drawable(&self) -> bool {
        self.visible && self.resolved_sprite().is_some()
    }
}

impl Default for AttachmentSlot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::TextureHandle;

    fn sprite(tex: u64) -> Arc<Sprite> {
        Arc::new(Sprite::quad("s", 1.0, 1.0, TextureHandle(tex), tex as u32))
    }

    #[test]
    fn override_wins_only_when_valid() {
        let mut slot = AttachmentSlot::new();
        slot.set_sprite(Some(sprite(1)));
        assert_eq!(slot.resolved_sprite().map(|s| s.tex_id), Some(1));

        slot.set_override_sprite(Some(sprite(2)));
        assert_eq!(slot.resolved_sprite().map(|s| s.tex_id), Some(2));

        slot.set_override_sprite(Some(sprite(0)));
        assert_eq!(slot.resolved_sprite().map(|s| s.tex_id), Some(1));
    }

    #[test]
    fn invisible_or_empty_slots_are_not_drawable() {
        let mut slot = AttachmentSlot::new();
        assert!(!slot.is_drawable());
        slot.set_sprite(Some(sprite(3)));
        assert!(slot.is_drawable());
        slot.visible = false;
        assert!(!slot.is_drawable());
    }

    #[test]
    fn sub_layer_is_clamped() {
        let mut slot = AttachmentSlot::new();
        slot.layer = 99;
        assert_eq!(slot.sub_layer(), 31);
    }
}

use crate::coords::{ColorRgba, Vec2, Vec3};
use crate::scene::TextureHandle;
use crate::sort::{RenderMode, SortKey};

/// One renderable quad.
///
/// Corner order for `position`, `color` and `uv` is top-left, top-right,
/// bottom-right, bottom-left.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub position: [Vec3; 4],
    pub color: [ColorRgba; 4],
    pub uv: [Vec2; 4],
    pub texture: TextureHandle,
    pub tex_id: u32,
    pub render_mode: RenderMode,
    pub sort_key: SortKey,
    /// Fine-grained depth, also written into the depth channel of `position`.
    pub z: f32,
    pub visible: bool,
    pub owner_id: u32,
}

impl Primitive {
    pub fn new(owner_id: u32) -> Self {
        Self {
            position: [Vec3::zero(); 4],
            color: [ColorRgba::white(); 4],
            uv: [Vec2::zero(); 4],
            texture: TextureHandle::NONE,
            tex_id: 0,
            render_mode: RenderMode::None,
            sort_key: SortKey::default(),
            z: 0.0,
            visible: false,
            owner_id,
        }
    }

    /// Moves all four corners by `offset`.
    #[inline]
    pub fn translate(&mut self, offset: Vec3) {
        for p in &mut self.position {
            *p += offset;
        }
    }

    /// Drops the texture reference so a recycled slot cannot draw stale pixels.
    #[inline]
    pub(crate) fn release_texture(&mut self) {
        self.texture = TextureHandle::NONE;
        self.tex_id = 0;
    }
}

impl Default for Primitive {
    fn default() -> Self {
        Self::new(0)
    }
}

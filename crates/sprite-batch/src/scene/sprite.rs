use crate::coords::Vec2;

/// Opaque handle to a GPU texture owned by the asset layer.
///
/// `TextureHandle::NONE` marks a sprite with nothing to draw.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u64);

impl TextureHandle {
    pub const NONE: TextureHandle = TextureHandle(0);

    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == 0
    }
}

/// Drawable image: a local-space quad with UVs into one texture.
///
/// Vertex and UV order is top-left, top-right, bottom-right, bottom-left.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub name: String,
    pub vertices: [Vec2; 4],
    pub uvs: [Vec2; 4],
    pub texture: TextureHandle,
    /// Small texture identifier folded into sort keys so primitives batch by texture.
    pub tex_id: u32,
}

impl Sprite {
    /// Full-texture quad of `width` x `height` centered on the local origin.
    pub fn quad(
        name: impl Into<String>,
        width: f32,
        height: f32,
        texture: TextureHandle,
        tex_id: u32,
    ) -> Self {
        let hw = width * 0.5;
        let hh = height * 0.5;
        Self {
            name: name.into(),
            vertices: [
                Vec2::new(-hw, hh),
                Vec2::new(hw, hh),
                Vec2::new(hw, -hh),
                Vec2::new(-hw, -hh),
            ],
            uvs: [
                Vec2::new(0.0, 1.0),
                Vec2::new(1.0, 1.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(0.0, 0.0),
            ],
            texture,
            tex_id,
        }
    }

    /// A sprite is drawable once it references a texture.
    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.texture.is_none()
    }
}

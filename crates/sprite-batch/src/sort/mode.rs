/// Blend/material family a primitive is drawn with.
///
/// The discriminant is the 4-bit render-mode index stored in sort keys.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RenderMode {
    #[default]
    None = 0,
    AlphaBlend = 1,
    Additive = 2,
    Multiply = 3,
    Opaque = 4,
    Overlay = 5,
    Lightmap = 6,
}

impl RenderMode {
    #[inline]
    pub const fn index(self) -> u64 {
        self as u64 & 0xf
    }
}

/// Render-mode configuration consumed by apply.
///
/// `sort_by_depth` selects the full depth-sorted key layout; otherwise primitives
/// are only grouped by render mode and texture.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RenderModeSetting {
    pub mode: RenderMode,
    pub sort_by_depth: bool,
}

impl RenderModeSetting {
    #[inline]
    pub const fn new(mode: RenderMode, sort_by_depth: bool) -> Self {
        Self { mode, sort_by_depth }
    }

    #[inline]
    pub const fn alpha_blend() -> Self {
        Self::new(RenderMode::AlphaBlend, true)
    }
}

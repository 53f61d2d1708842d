/// 64-bit draw-order key. Primitives are drawn in ascending key order.
///
/// Depth-sorted layout, MSB to LSB:
///
/// | bits  | width | field                        |
/// |-------|-------|------------------------------|
/// | 63    | 1     | semi-transparent (always 1)  |
/// | 62    | 1     | reserved (0)                 |
/// | 58-61 | 4     | inverted layer               |
/// | 48-56 | 9     | inverted depth in layer      |
/// | 18-47 | 30    | owner id                     |
/// | 14-17 | 4     | render-mode index            |
/// | 10-13 | 4     | inverted sub-layer           |
/// | 0-9   | 10    | texture id                   |
///
/// Bit 57 is unused. Unsorted keys carry only the render mode (bits 59-62) and
/// texture id (bits 52-58).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortKey(pub u64);

impl SortKey {
    pub(crate) const TRANSPARENT_BIT: u64 = 1 << 63;

    pub(crate) const LAYER_SHIFT: u32 = 58;
    pub(crate) const LAYER_MASK: u64 = 0xf;

    pub(crate) const DEPTH_SHIFT: u32 = 48;
    pub(crate) const DEPTH_MASK: u64 = 0x1ff;

    pub(crate) const OWNER_SHIFT: u32 = 18;
    pub(crate) const OWNER_MASK: u64 = 0x3fff_ffff;

    pub(crate) const MODE_SHIFT: u32 = 14;
    pub(crate) const MODE_MASK: u64 = 0xf;

    pub(crate) const SUB_LAYER_SHIFT: u32 = 10;
    pub(crate) const SUB_LAYER_MASK: u64 = 0xf;

    pub(crate) const TEXTURE_MASK: u64 = 0x3ff;

    pub(crate) const UNSORTED_MODE_SHIFT: u32 = 59;
    pub(crate) const UNSORTED_TEXTURE_SHIFT: u32 = 52;
    pub(crate) const UNSORTED_TEXTURE_MASK: u64 = 0x7f;

    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.0 & Self::TRANSPARENT_BIT != 0
    }

    /// Stored (inverted) layer field.
    #[inline]
    pub const fn layer_field(self) -> u64 {
        (self.0 >> Self::LAYER_SHIFT) & Self::LAYER_MASK
    }

    /// Stored (inverted) depth field.
    #[inline]
    pub const fn depth_field(self) -> u64 {
        (self.0 >> Self::DEPTH_SHIFT) & Self::DEPTH_MASK
    }

    #[inline]
    pub const fn owner(self) -> u64 {
        (self.0 >> Self::OWNER_SHIFT) & Self::OWNER_MASK
    }

    #[inline]
    pub const fn mode_field(self) -> u64 {
        (self.0 >> Self::MODE_SHIFT) & Self::MODE_MASK
    }

    /// Stored (inverted) sub-layer field.
    #[inline]
    pub const fn sub_layer_field(self) -> u64 {
        (self.0 >> Self::SUB_LAYER_SHIFT) & Self::SUB_LAYER_MASK
    }

    #[inline]
    pub const fn texture(self) -> u64 {
        self.0 & Self::TEXTURE_MASK
    }
}

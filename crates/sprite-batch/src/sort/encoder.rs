use super::{RenderModeSetting, SortKey};

/// Largest depth-in-layer value; larger inputs are clamped.
pub const MAX_DEPTH: u32 = 511;

/// Largest sub-layer value used for `z`. Keys keep only the low 4 bits.
pub const MAX_SUB_LAYER: u32 = 31;

/// Highest layer representable in a key. Layers above it fold to 0.
const MAX_KEY_LAYER: u32 = 0xf;

const Z_PER_LAYER: f32 = 64.0;
const Z_PER_DEPTH: f32 = 0.125;
const Z_PER_SUB_LAYER: f32 = 0.003_906_25;

/// Computes sort keys and `z` values for one renderer.
///
/// [`prepare`](Self::prepare) folds the per-renderer fields (transparency, layer,
/// depth, owner, render mode) into a prefix once per apply pass;
/// [`encode`](Self::encode) then only adds the per-primitive sub-layer and texture.
#[derive(Debug, Copy, Clone, Default)]
pub struct SortKeyEncoder {
    prefix: u64,
    base_z: f32,
    sort_by_depth: bool,
}

impl SortKeyEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layer value as stored in keys and used for `z`.
    #[inline]
    pub fn key_layer(layer: u32) -> u32 {
        if layer > MAX_KEY_LAYER { 0 } else { layer }
    }

    /// Recomputes the per-renderer prefix. Call once per apply, before `encode`.
    pub fn prepare(&mut self, owner_id: u32, layer: u32, depth: u32, setting: RenderModeSetting) {
        let layer = Self::key_layer(layer) as u64;
        let depth = depth.min(MAX_DEPTH) as u64;
        let mode = setting.mode.index();

        self.base_z = layer as f32 * Z_PER_LAYER + depth as f32 * Z_PER_DEPTH;
        self.sort_by_depth = setting.sort_by_depth;

        self.prefix = if setting.sort_by_depth {
            let owner = owner_id as u64 & SortKey::OWNER_MASK;
            SortKey::TRANSPARENT_BIT
                | ((SortKey::LAYER_MASK - layer) << SortKey::LAYER_SHIFT)
                | ((SortKey::DEPTH_MASK - depth) << SortKey::DEPTH_SHIFT)
                | (owner << SortKey::OWNER_SHIFT)
                | (mode << SortKey::MODE_SHIFT)
        } else {
            mode << SortKey::UNSORTED_MODE_SHIFT
        };
    }

    /// Key and `z` for one primitive drawn with texture `tex_id` on `sub_layer`.
    #[inline]
    pub fn encode(&self, tex_id: u32, sub_layer: u32) -> (SortKey, f32) {
        let sub_layer = sub_layer.min(MAX_SUB_LAYER);
        let z = self.base_z + sub_layer as f32 * Z_PER_SUB_LAYER;

        let key = if self.sort_by_depth {
            let inverted_sub = SortKey::SUB_LAYER_MASK - (sub_layer as u64 & SortKey::SUB_LAYER_MASK);
            self.prefix
                | (inverted_sub << SortKey::SUB_LAYER_SHIFT)
                | (tex_id as u64 & SortKey::TEXTURE_MASK)
        } else {
            self.prefix
                | ((tex_id as u64 & SortKey::UNSORTED_TEXTURE_MASK) << SortKey::UNSORTED_TEXTURE_SHIFT)
        };

        (SortKey(key), z)
    }

    /// `z` shared by every primitive of the renderer before the sub-layer offset.
    #[inline]
    pub fn base_z(&self) -> f32 {
        self.base_z
    }

    #[inline]
    pub fn prefix(&self) -> u64 {
        self.prefix
    }
}

/// Depth-axis position for a layer/depth pair (no sub-layer).
#[inline]
pub(crate) fn depth_axis_value(layer: u32, depth: u32) -> f32 {
    layer as f32 * Z_PER_LAYER + depth.min(MAX_DEPTH) as f32 * Z_PER_DEPTH
}

/// Inverse of [`depth_axis_value`]: splits a depth-axis coordinate into layer and depth.
///
/// Negative coordinates map to layer 0, depth 0. Both parts truncate.
#[inline]
pub(crate) fn split_depth_axis(d: f32) -> (u32, u32) {
    if d.is_nan() || d <= 0.0 {
        return (0, 0);
    }
    let layer = (d / Z_PER_LAYER) as u32;
    let depth = ((d % Z_PER_LAYER) / Z_PER_DEPTH) as u32;
    (layer, depth.min(MAX_DEPTH))
}

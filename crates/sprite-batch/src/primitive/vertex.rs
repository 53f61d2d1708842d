use bytemuck::{Pod, Zeroable};

use super::Primitive;

/// Interleaved vertex emitted for GPU upload.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct SpriteVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
    pub uv: [f32; 2],
}

/// Two triangles per quad, relative to the quad's first vertex.
pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

impl SpriteVertex {
    /// The four corner vertices of `pri`, in corner order.
    pub fn quad(pri: &Primitive) -> [SpriteVertex; 4] {
        core::array::from_fn(|i| SpriteVertex {
            position: [pri.position[i].x, pri.position[i].y, pri.position[i].z],
            color: pri.color[i].to_array(),
            uv: [pri.uv[i].x, pri.uv[i].y],
        })
    }
}

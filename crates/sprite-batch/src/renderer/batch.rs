use crate::coords::{Aabb, Plane};
use crate::primitive::Primitive;

/// Borrowed view of a renderer's output, handed to the batch consumer.
#[derive(Debug, Copy, Clone)]
pub struct PrimitiveBatch<'a> {
    pub owner_id: u32,
    pub plane: Plane,
    /// Active primitives; check each `visible` flag.
    pub primitives: &'a [Primitive],
    /// World AABB after anchoring, in in-plane coordinates.
    pub bounds: Aabb,
    pub radius: f32,
    /// Renderer-level visibility from the last apply or cull.
    pub visible: bool,
}

impl PrimitiveBatch<'_> {
    pub fn visible_primitives(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter().filter(|p| p.visible)
    }

    pub fn visible_count(&self) -> usize {
        self.visible_primitives().count()
    }
}

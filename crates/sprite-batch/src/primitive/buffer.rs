use super::{Primitive, SpriteVertex};

/// Growable pool of primitives, index-paired with attachment slots.
///
/// The buffer never shrinks. Which prefix is "active" is decided by the owning
/// registry and passed in where it matters.
#[derive(Debug, Default)]
pub struct PrimitiveBuffer {
    items: Vec<Primitive>,
    sorted_indices: Vec<usize>,
}

impl PrimitiveBuffer {
    /// Creates `capacity` default primitives tagged with `owner_id`.
    pub fn new(capacity: usize, owner_id: u32) -> Self {
        let mut buf = Self::default();
        buf.grow_to(capacity, owner_id);
        buf
    }

    /// Total number of primitives (active and free).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    /// Appends default primitives until `capacity` entries exist. No-op if already larger.
    pub fn grow_to(&mut self, capacity: usize, owner_id: u32) {
        let old = self.items.len();
        if capacity <= old {
            return;
        }
        self.items.reserve_exact(capacity - old);
        self.items.extend((old..capacity).map(|_| Primitive::new(owner_id)));
    }

    /// Re-tags every primitive with a new owner.
    pub fn set_owner(&mut self, owner_id: u32) {
        for pri in &mut self.items {
            pri.owner_id = owner_id;
        }
    }

    #[inline]
    pub fn get(&self, index: usize) -> &Primitive {
        &self.items[index]
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> &mut Primitive {
        &mut self.items[index]
    }

    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
    }

    /// The first `active` primitives.
    #[inline]
    pub fn active(&self, active: usize) -> &[Primitive] {
        &self.items[..active]
    }

    #[inline]
    pub fn active_mut(&mut self, active: usize) -> &mut [Primitive] {
        &mut self.items[..active]
    }

    /// Indices of visible primitives among the first `active`, ascending by sort key.
    ///
    /// Equal keys keep index order. The index buffer is reused across calls.
    pub fn indices_in_paint_order(&mut self, active: usize) -> &[usize] {
        let items = &self.items[..active];
        self.sorted_indices.clear();
        self.sorted_indices
            .extend((0..items.len()).filter(|&i| items[i].visible));
        self.sorted_indices
            .sort_by(|&a, &b| items[a].sort_key.cmp(&items[b].sort_key).then(a.cmp(&b)));
        &self.sorted_indices
    }

    /// Appends four vertices per visible active primitive to `out`, in paint order.
    ///
    /// Returns the number of quads written.
    pub fn write_vertices(&mut self, active: usize, out: &mut Vec<SpriteVertex>) -> usize {
        self.indices_in_paint_order(active);
        out.reserve(self.sorted_indices.len() * 4);
        for &i in &self.sorted_indices {
            out.extend_from_slice(&SpriteVertex::quad(&self.items[i]));
        }
        self.sorted_indices.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec3;
    use crate::sort::SortKey;

    fn visible(buf: &mut PrimitiveBuffer, i: usize, key: u64) {
        let p = buf.get_mut(i);
        p.visible = true;
        p.sort_key = SortKey(key);
    }

    // ── growth ────────────────────────────────────────────────────────────

    #[test]
    fn grow_never_shrinks() {
        let mut buf = PrimitiveBuffer::new(4, 9);
        buf.grow_to(2, 9);
        assert_eq!(buf.capacity(), 4);
        buf.grow_to(8, 9);
        assert_eq!(buf.capacity(), 8);
        assert!(buf.active(8).iter().all(|p| p.owner_id == 9));
    }

    // ── paint order ───────────────────────────────────────────────────────

    #[test]
    fn paint_order_sorts_by_key_and_skips_hidden() {
        let mut buf = PrimitiveBuffer::new(5, 1);
        visible(&mut buf, 0, 30);
        visible(&mut buf, 1, 10);
        visible(&mut buf, 2, 20);
        visible(&mut buf, 4, 0); // outside the active prefix
        // index 3 stays hidden
        assert_eq!(buf.indices_in_paint_order(4), &[1, 2, 0]);
    }

    #[test]
    fn paint_order_ties_keep_index_order() {
        let mut buf = PrimitiveBuffer::new(3, 1);
        for i in 0..3 {
            visible(&mut buf, i, 5);
        }
        assert_eq!(buf.indices_in_paint_order(3), &[0, 1, 2]);
    }

    // ── vertices ──────────────────────────────────────────────────────────

    #[test]
    fn write_vertices_emits_four_per_visible_quad() {
        let mut buf = PrimitiveBuffer::new(2, 1);
        visible(&mut buf, 1, 0);
        buf.get_mut(1).position[2] = Vec3::new(1.0, 2.0, 3.0);

        let mut out = Vec::new();
        assert_eq!(buf.write_vertices(2, &mut out), 1);
        assert_eq!(out.len(), 4);
        assert_eq!(out[2].position, [1.0, 2.0, 3.0]);

        let bytes: &[u8] = bytemuck::cast_slice(&out);
        assert_eq!(bytes.len(), 4 * core::mem::size_of::<SpriteVertex>());
    }
}

use super::Vec2;

/// Axis-aligned bounding box in in-plane world coordinates.
///
/// `min`/`max` are inclusive; a box built from a single point has zero extent.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    #[inline]
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Degenerate box containing exactly `p`.
    #[inline]
    pub const fn point(p: Vec2) -> Self {
        Self { min: p, max: p }
    }

    /// Grows the box so it contains `p`.
    #[inline]
    pub fn extend(&mut self, p: Vec2) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new((self.min.x + self.max.x) * 0.5, (self.min.y + self.max.y) * 0.5)
    }

    #[inline]
    pub fn half_extents(self) -> Vec2 {
        Vec2::new((self.max.x - self.min.x) * 0.5, (self.max.y - self.min.y) * 0.5)
    }

    /// Radius of the circumscribed circle (half diagonal).
    #[inline]
    pub fn radius(self) -> f32 {
        self.half_extents().length()
    }

    #[inline]
    pub fn translated(self, offset: Vec2) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

/// Running min/max fold used while transforming vertices.
///
/// The first folded point seeds the box; later points only extend it.
#[derive(Debug, Copy, Clone, Default)]
pub(crate) struct AabbFold {
    bounds: Option<Aabb>,
}

impl AabbFold {
    #[inline]
    pub(crate) fn push(&mut self, p: Vec2) {
        match &mut self.bounds {
            Some(b) => b.extend(p),
            None => self.bounds = Some(Aabb::point(p)),
        }
    }

    /// Folded box, or a degenerate box at `fallback` if nothing was pushed.
    #[inline]
    pub(crate) fn finish_or(self, fallback: Vec2) -> Aabb {
        self.bounds.unwrap_or(Aabb::point(fallback))
    }
}

use crate::coords::{Aabb, Plane, Vec2};
use crate::primitive::Primitive;

/// Point of the renderer AABB that is pinned to the frame origin after a pass.
///
/// "Top" is the `max.y` edge.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum Anchor {
    #[default]
    None,
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
    /// Offset from the top-left corner.
    Custom(Vec2),
}

impl Anchor {
    /// The anchored point of `aabb`, or `None` for [`Anchor::None`].
    pub fn point(self, aabb: Aabb) -> Option<Vec2> {
        let c = aabb.center();
        let (min, max) = (aabb.min, aabb.max);
        let p = match self {
            Anchor::None => return None,
            Anchor::TopLeft => Vec2::new(min.x, max.y),
            Anchor::TopCenter => Vec2::new(c.x, max.y),
            Anchor::TopRight => Vec2::new(max.x, max.y),
            Anchor::MiddleLeft => Vec2::new(min.x, c.y),
            Anchor::MiddleCenter => c,
            Anchor::MiddleRight => Vec2::new(max.x, c.y),
            Anchor::BottomLeft => Vec2::new(min.x, min.y),
            Anchor::BottomCenter => Vec2::new(c.x, min.y),
            Anchor::BottomRight => Vec2::new(max.x, min.y),
            Anchor::Custom(pivot) => Vec2::new(min.x + pivot.x, max.y + pivot.y),
        };
        Some(p)
    }
}

/// Shifts the freshly computed geometry so the anchored point lands on `origin`.
///
/// Only primitives drawn in the current pass (`visible`) move, so the offset is
/// never applied twice to the same data. Returns the shifted AABB and the
/// in-plane offset (zero for [`Anchor::None`]).
pub fn apply_anchor(
    anchor: Anchor,
    plane: Plane,
    origin: Vec2,
    aabb: Aabb,
    primitives: &mut [Primitive],
) -> (Aabb, Vec2) {
    let Some(point) = anchor.point(aabb) else {
        return (aabb, Vec2::zero());
    };

    let offset = origin - point;
    let world = plane.offset_to_world(offset);
    for pri in primitives.iter_mut().filter(|p| p.visible) {
        pri.translate(world);
    }

    (aabb.translated(offset), offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec3;

    fn bounds() -> Aabb {
        Aabb::new(Vec2::new(2.0, 4.0), Vec2::new(6.0, 10.0))
    }

    fn drawn(at: Vec3) -> Primitive {
        let mut p = Primitive::new(0);
        p.position = [at; 4];
        p.visible = true;
        p
    }

    #[test]
    fn presets_pick_edges_and_centers() {
        let b = bounds();
        assert_eq!(Anchor::TopLeft.point(b), Some(Vec2::new(2.0, 10.0)));
        assert_eq!(Anchor::TopCenter.point(b), Some(Vec2::new(4.0, 10.0)));
        assert_eq!(Anchor::MiddleRight.point(b), Some(Vec2::new(6.0, 7.0)));
        assert_eq!(Anchor::BottomCenter.point(b), Some(Vec2::new(4.0, 4.0)));
        assert_eq!(Anchor::BottomRight.point(b), Some(Vec2::new(6.0, 4.0)));
        assert_eq!(Anchor::Custom(Vec2::new(1.0, -2.0)).point(b), Some(Vec2::new(3.0, 8.0)));
        assert_eq!(Anchor::None.point(b), None);
    }

    #[test]
    fn bottom_right_moves_geometry_by_origin_minus_corner() {
        let mut prims = [drawn(Vec3::new(6.0, 4.0, 1.5)), drawn(Vec3::new(2.0, 10.0, 1.5))];
        let (aabb, offset) =
            apply_anchor(Anchor::BottomRight, Plane::XY, Vec2::zero(), bounds(), &mut prims);

        assert_eq!(offset, Vec2::new(-6.0, -4.0));
        assert_eq!(aabb.max.x, 0.0);
        assert_eq!(aabb.min.y, 0.0);
        assert_eq!(prims[0].position[0], Vec3::new(0.0, 0.0, 1.5));
        assert_eq!(prims[1].position[3], Vec3::new(-4.0, 6.0, 1.5));
    }

    #[test]
    fn offset_follows_the_plane_axes() {
        let mut prims = [drawn(Vec3::new(0.0, -1.0, 0.0))];
        apply_anchor(Anchor::BottomLeft, Plane::XZ, Vec2::zero(), bounds(), &mut prims);
        // In-plane (u, v) = (x, z); the depth axis y is untouched.
        assert_eq!(prims[0].position[0], Vec3::new(-2.0, -1.0, -4.0));
    }

    #[test]
    fn hidden_primitives_do_not_move() {
        let mut hidden = drawn(Vec3::new(1.0, 1.0, 0.0));
        hidden.visible = false;
        let mut prims = [hidden];
        apply_anchor(Anchor::MiddleCenter, Plane::XY, Vec2::zero(), bounds(), &mut prims);
        assert_eq!(prims[0].position[0], Vec3::new(1.0, 1.0, 0.0));
    }
}

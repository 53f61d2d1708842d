use super::{Vec2, Vec3};

/// One of the three fixed world planes a renderer draws into.
///
/// Each plane picks two world axes for in-plane `(u, v)` coordinates; the
/// remaining axis carries the encoded depth. For `XZ` and `ZY` the depth axis
/// points away from the viewer, so the depth value is negated there.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum Plane {
    #[default]
    XY,
    XZ,
    ZY,
}

impl Plane {
    /// Places in-plane coordinates `uv` at `depth` in world space.
    #[inline]
    pub fn to_world(self, uv: Vec2, depth: f32) -> Vec3 {
        match self {
            Plane::XY => Vec3::new(uv.x, uv.y, depth),
            Plane::XZ => Vec3::new(uv.x, -depth, uv.y),
            Plane::ZY => Vec3::new(-depth, uv.y, uv.x),
        }
    }

    /// Lifts an in-plane offset to world space with no depth component.
    #[inline]
    pub fn offset_to_world(self, uv: Vec2) -> Vec3 {
        match self {
            Plane::XY => Vec3::new(uv.x, uv.y, 0.0),
            Plane::XZ => Vec3::new(uv.x, 0.0, uv.y),
            Plane::ZY => Vec3::new(0.0, uv.y, uv.x),
        }
    }

    /// Projects a world point onto this plane's `(u, v)` axes.
    #[inline]
    pub fn project(self, p: Vec3) -> Vec2 {
        match self {
            Plane::XY => Vec2::new(p.x, p.y),
            Plane::XZ => Vec2::new(p.x, p.z),
            Plane::ZY => Vec2::new(p.z, p.y),
        }
    }

    /// Picks the in-plane components of a 3D scale.
    #[inline]
    pub fn scale_axes(self, s: Vec3) -> Vec2 {
        self.project(s)
    }

    /// In-plane rotation (degrees) from a node's Euler angles plus a local offset.
    #[inline]
    pub fn rotation(self, euler: Vec3, local: f32) -> f32 {
        match self {
            Plane::XY => euler.z + local,
            Plane::XZ => -(euler.y + local),
            Plane::ZY => -(euler.x + local),
        }
    }

    /// Reads the signed depth coordinate of a world point.
    #[inline]
    pub fn depth_of(self, p: Vec3) -> f32 {
        match self {
            Plane::XY => p.z,
            Plane::XZ => -p.y,
            Plane::ZY => -p.x,
        }
    }

    /// Returns `p` with its depth coordinate replaced; the in-plane axes are untouched.
    #[inline]
    pub fn with_depth(self, p: Vec3, depth: f32) -> Vec3 {
        match self {
            Plane::XY => Vec3::new(p.x, p.y, depth),
            Plane::XZ => Vec3::new(p.x, -depth, p.z),
            Plane::ZY => Vec3::new(-depth, p.y, p.z),
        }
    }
}

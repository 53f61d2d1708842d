use crate::coords::{Plane, Vec2};
use crate::scene::SceneNode;

/// Renderer frame that attachment-local coordinates are folded into.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneFrame {
    pub plane: Plane,
    /// In-plane world origin.
    pub origin: Vec2,
    /// In-plane rotation, degrees.
    pub rotation: f32,
    /// Folded scale: hierarchy scale x scale factor x renderer local scale.
    pub scale: Vec2,
}

impl PlaneFrame {
    /// Resolves the frame from the owning node.
    ///
    /// With `follow_hierarchy` off the node contributes nothing: origin is zero,
    /// hierarchy scale is one and only `local_rotation` rotates.
    pub fn resolve(
        node: &dyn SceneNode,
        plane: Plane,
        follow_hierarchy: bool,
        scale_factor: f32,
        local_scale: Vec2,
        local_rotation: f32,
    ) -> Self {
        let (origin, euler, hierarchy_scale) = if follow_hierarchy {
            (
                plane.project(node.position()),
                node.euler_angles(),
                plane.scale_axes(node.hierarchy_scale()),
            )
        } else {
            (Vec2::zero(), Default::default(), Vec2::one())
        };

        Self {
            plane,
            origin,
            rotation: plane.rotation(euler, local_rotation),
            scale: hierarchy_scale.scale(local_scale) * scale_factor,
        }
    }

    /// Maps a renderer-local point to in-plane world coordinates: scale, rotate,
    /// then offset by the origin.
    pub fn to_world(self, local: Vec2) -> Vec2 {
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        self.to_world_with(local, sin, cos)
    }

    /// [`to_world`](Self::to_world) with the rotation's sine and cosine precomputed.
    #[inline]
    pub(crate) fn to_world_with(self, local: Vec2, sin: f32, cos: f32) -> Vec2 {
        self.origin + local.scale(self.scale).rotated(sin, cos)
    }
}

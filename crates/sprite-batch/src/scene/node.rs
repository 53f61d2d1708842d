use crate::coords::Vec3;

/// Read/write view of the scene-graph node that owns a renderer.
pub trait SceneNode {
    /// Stable identifier used to group this renderer's primitives in sort keys.
    fn instance_id(&self) -> u32;

    /// World-space position.
    fn position(&self) -> Vec3;

    fn set_position(&mut self, position: Vec3);

    /// World-space Euler angles in degrees.
    fn euler_angles(&self) -> Vec3;

    /// The node's own local scale.
    fn local_scale(&self) -> Vec3;

    /// Product of the node's local scale and every ancestor's local scale.
    fn hierarchy_scale(&self) -> Vec3;

    /// Transforms a point from node-local space into world space.
    fn transform_point(&self, local: Vec3) -> Vec3;

    /// Render layer the node belongs to.
    fn layer(&self) -> u32;

    fn set_layer(&mut self, layer: u32);
}

/// Flat node: a world transform plus the folded scale of its ancestors.
///
/// Rotation is applied Z first, then X, then Y.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeTransform {
    pub id: u32,
    pub position: Vec3,
    pub euler_angles: Vec3,
    pub local_scale: Vec3,
    pub ancestor_scale: Vec3,
    pub layer: u32,
}

impl NodeTransform {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            position: Vec3::zero(),
            euler_angles: Vec3::zero(),
            local_scale: Vec3::one(),
            ancestor_scale: Vec3::one(),
            layer: 0,
        }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn rotated(mut self, euler_angles: Vec3) -> Self {
        self.euler_angles = euler_angles;
        self
    }

    pub fn scaled(mut self, local_scale: Vec3) -> Self {
        self.local_scale = local_scale;
        self
    }

    fn rotate(&self, v: Vec3) -> Vec3 {
        let v = rotate_z(v, self.euler_angles.z);
        let v = rotate_x(v, self.euler_angles.x);
        rotate_y(v, self.euler_angles.y)
    }
}

impl Default for NodeTransform {
    fn default() -> Self {
        Self::new(0)
    }
}

impl SceneNode for NodeTransform {
    fn instance_id(&self) -> u32 {
        self.id
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn euler_angles(&self) -> Vec3 {
        self.euler_angles
    }

    fn local_scale(&self) -> Vec3 {
        self.local_scale
    }

    fn hierarchy_scale(&self) -> Vec3 {
        self.local_scale.scale(self.ancestor_scale)
    }

    fn transform_point(&self, local: Vec3) -> Vec3 {
        self.position + self.rotate(local.scale(self.hierarchy_scale()))
    }

    fn layer(&self) -> u32 {
        self.layer
    }

    fn set_layer(&mut self, layer: u32) {
        self.layer = layer;
    }
}

fn rotate_z(v: Vec3, deg: f32) -> Vec3 {
    let (s, c) = deg.to_radians().sin_cos();
    Vec3::new(v.x * c - v.y * s, v.x * s + v.y * c, v.z)
}

fn rotate_x(v: Vec3, deg: f32) -> Vec3 {
    let (s, c) = deg.to_radians().sin_cos();
    Vec3::new(v.x, v.y * c - v.z * s, v.y * s + v.z * c)
}

fn rotate_y(v: Vec3, deg: f32) -> Vec3 {
    let (s, c) = deg.to_radians().sin_cos();
    Vec3::new(v.x * c + v.z * s, v.y, -v.x * s + v.z * c)
}

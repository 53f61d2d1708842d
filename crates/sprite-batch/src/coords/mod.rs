//! Coordinate, bounds and color types shared by the transform pipeline and the culler.
//!
//! Conventions:
//! - In-plane space is `(u, v)` with +V up (the "top" of a bounding box is `max.y`).
//! - World space is 3D; a [`Plane`] maps in-plane coordinates plus a depth value onto it.
//! - Rotations are in degrees at API boundaries and converted once per apply.

mod aabb;
mod color;
mod plane;
mod vec2;
mod vec3;

pub use aabb::Aabb;
pub(crate) use aabb::AabbFold;
pub use color::ColorRgba;
pub use plane::Plane;
pub use vec2::Vec2;
pub use vec3::Vec3;

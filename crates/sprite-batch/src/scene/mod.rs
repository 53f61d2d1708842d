//! Narrow interfaces to the collaborators the renderer reads from.
//!
//! Responsibilities:
//! - `SceneNode`: the owning node's world placement and hierarchy scale
//! - `Sprite`: the drawable image asset (quad, UVs, texture)
//! - `AttachmentDriver`: the external object (usually an animation track) driving a slot
//!
//! The renderer never mutates drivers or sprites. It writes to the node only for the
//! opt-in depth feedback and the layer derived from it.

mod driver;
mod node;
mod sprite;

pub use driver::{path_hash, AttachmentDriver, NamedDriver};
pub use node::{NodeTransform, SceneNode};
pub use sprite::{Sprite, TextureHandle};

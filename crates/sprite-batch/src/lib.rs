//! Sprite batch crate.
//!
//! Turns the sprites attached to a scene node into sorted, world-space quad
//! primitives ready for a GPU batch. GPU submission lives in the embedding
//! application; this crate stops at [`primitive::SpriteVertex`] data.

pub mod attach;
pub mod coords;
pub mod cull;
pub mod primitive;
pub mod renderer;
pub mod scene;
pub mod sort;
pub mod transform;

pub mod logging;

pub use renderer::{FramePhase, PrimitiveBatch, RendererConfig, SpriteRenderer, UpdateMode};

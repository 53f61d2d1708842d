//! Renderer facade tying the registry, encoder, transform pipeline and culler together.
//!
//! The embedding application drives it explicitly: `init` once the owning node
//! exists, `apply` (directly or through `tick`) each frame, `cull` from the
//! camera pass, and `teardown` when the node goes away.

mod batch;
mod config;
mod sprite_renderer;
mod update;

pub use batch::PrimitiveBatch;
pub use config::RendererConfig;
pub use sprite_renderer::{ApplyHook, SpriteRenderer};
pub use update::{FramePhase, UpdateMode};

//! GPU-facing primitive storage.
//!
//! Responsibilities:
//! - own the fixed-size quad records produced by the transform pipeline
//! - grow without ever shrinking; relocate entries only through `swap`
//! - provide paint-order iteration and flattening into vertex data for upload
//!
//! Performance characteristics:
//! - primitives are index-addressed inside one `Vec`; nothing is allocated per primitive
//! - paint-order and vertex scratch buffers are reused across frames

mod buffer;
mod record;
mod vertex;

pub use buffer::PrimitiveBuffer;
pub use record::Primitive;
pub use vertex::{SpriteVertex, QUAD_INDICES};

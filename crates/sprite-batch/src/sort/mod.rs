//! Draw-order encoding.
//!
//! Responsibilities:
//! - pack layer, depth, owner, render mode, sub-layer and texture into one `u64`
//!   whose ascending order is the draw order
//! - derive the fine-grained `z` written into the primitive's depth channel
//! - compute the per-renderer key prefix once per apply pass

mod encoder;
mod key;
mod mode;

pub(crate) use encoder::{depth_axis_value, split_depth_axis};
pub use encoder::{SortKeyEncoder, MAX_DEPTH, MAX_SUB_LAYER};
pub use key::SortKey;
pub use mode::{RenderMode, RenderModeSetting};

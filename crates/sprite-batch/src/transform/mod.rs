//! Attachment-to-world transform pipeline.
//!
//! Per active attachment: shear and scale the sprite quad, rotate by the attachment's
//! own rotation, translate by its local position, then fold in the renderer frame
//! (parent scale, rotation, world origin) and place the result on the renderer's
//! plane at the encoded `z`. The pass folds every written vertex into the renderer
//! AABB. Anchoring runs after the pass and shifts everything uniformly.

mod anchor;
mod frame;
mod pass;

pub use anchor::{apply_anchor, Anchor};
pub use frame::PlaneFrame;
pub use pass::{transform_attachments, TransformPass};

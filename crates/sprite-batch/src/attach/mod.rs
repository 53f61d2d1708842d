//! Attachment lifecycle.
//!
//! Responsibilities:
//! - hold per-attachment transform state (`AttachmentSlot`), index-paired with primitives
//! - partition slots into an active prefix and a free tail
//! - attach/detach in O(1); detach swaps the last active slot into the hole
//! - remember override sprites by driver path so re-attaching restores them
//!
//! Attachment order is not stable across detach. Callers that need a stable
//! ordering must keep their own mapping from their handles to slot ids.

mod registry;
mod slot;

pub use registry::AttachmentRegistry;
pub use slot::AttachmentSlot;

//! Visibility culling against a view circle.
//!
//! Two modes:
//! - no groups: the whole renderer is tested once against its AABB circle
//! - groups: each group circle is tested on its own and only groups whose result
//!   changed since the previous evaluation write visibility to their attachments

mod culler;
mod group;

pub use culler::{CullStats, VisibilityCuller};
pub use group::{CullingGroup, GroupBounds};

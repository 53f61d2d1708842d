use crate::attach::AttachmentSlot;
use crate::coords::{Plane, Vec2};
use crate::primitive::Primitive;
use crate::scene::SceneNode;

use super::CullingGroup;

/// Counters from one group-culling evaluation.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct CullStats {
    /// Groups whose attachments were written this evaluation.
    pub groups_toggled: usize,
    /// Attachment/primitive pairs written.
    pub writes: usize,
}

/// Evaluates a renderer's culling groups against a view circle.
///
/// Borrows the groups for one evaluation; the hysteresis state lives in the
/// groups themselves.
#[derive(Debug)]
pub struct VisibilityCuller<'a> {
    groups: &'a mut [CullingGroup],
}

impl<'a> VisibilityCuller<'a> {
    pub fn new(groups: &'a mut [CullingGroup]) -> Self {
        Self { groups }
    }

    #[inline]
    pub fn has_groups(&self) -> bool {
        !self.groups.is_empty()
    }

    /// Forces every group to write on its next evaluation.
    pub fn reset(&mut self) {
        for g in self.groups.iter_mut() {
            g.reset();
        }
    }

    /// Whole-renderer test: the view circle overlaps the renderer's bounding circle.
    #[inline]
    pub fn renderer_visible(
        view_center: Vec2,
        view_radius: f32,
        bounds_center: Vec2,
        bounds_radius: f32,
    ) -> bool {
        view_center.distance(bounds_center) <= view_radius + bounds_radius
    }

    /// Tests every group circle against the view circle.
    ///
    /// A group writes its result to the slots and primitives it lists only when
    /// the result differs from the previous evaluation, or on its first one.
    /// Ids outside the active region are skipped.
    pub fn cull_groups(
        &mut self,
        node: &dyn SceneNode,
        plane: Plane,
        view_center: Vec2,
        view_radius: f32,
        slots: &mut [AttachmentSlot],
        primitives: &mut [Primitive],
    ) -> CullStats {
        let scale = plane.scale_axes(node.local_scale());
        let mut stats = CullStats::default();

        for group in self.groups.iter_mut() {
            let center = plane.project(node.transform_point(plane.offset_to_world(group.center)));
            let radius = group.bounds.world_radius(scale);
            let visible = view_center.distance(center) <= view_radius + radius;

            if !group.settle(visible) {
                continue;
            }

            stats.groups_toggled += 1;
            for &idx in &group.indices {
                let (Some(slot), Some(pri)) = (slots.get_mut(idx), primitives.get_mut(idx)) else {
                    log::trace!("culling group '{}' skips inactive slot {idx}", group.name);
                    continue;
                };
                slot.visible = visible;
                // A slot without a drawable sprite never shows its stale primitive.
                pri.visible = visible && slot.resolved_sprite().is_some();
                stats.writes += 1;
            }
            log::debug!(
                "culling group '{}' -> {}",
                group.name,
                if visible { "visible" } else { "hidden" }
            );
        }

        stats
    }
}

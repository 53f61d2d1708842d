use crate::attach::AttachmentSlot;
use crate::coords::{Aabb, AabbFold, ColorRgba, Vec2};
use crate::primitive::Primitive;
use crate::sort::{RenderMode, SortKeyEncoder};

use super::PlaneFrame;

/// Renderer-wide inputs of one transform pass.
#[derive(Debug, Copy, Clone)]
pub struct TransformPass<'a> {
    pub frame: PlaneFrame,
    pub color: ColorRgba,
    /// Top-left, top-right, bottom-right, bottom-left multipliers.
    pub corner_colors: [ColorRgba; 4],
    pub render_mode: RenderMode,
    /// Visibility stamped on every primitive that is drawn.
    pub visible: bool,
    pub encoder: &'a SortKeyEncoder,
}

/// Writes geometry, color, texture and sort key for every drawable attachment.
///
/// Slots that are hidden or have no valid sprite only get `visible = false`; the
/// rest of their primitive is left as it was. Returns the AABB of all written
/// vertices, or a point at the frame origin if nothing was drawn.
pub fn transform_attachments(
    pass: &TransformPass<'_>,
    slots: &[AttachmentSlot],
    primitives: &mut [Primitive],
) -> Aabb {
    debug_assert_eq!(slots.len(), primitives.len());

    let frame = pass.frame;
    let (psin, pcos) = frame.rotation.to_radians().sin_cos();
    let mut fold = AabbFold::default();

    for (i, (slot, pri)) in slots.iter().zip(primitives.iter_mut()).enumerate() {
        debug_assert_eq!(slot.id(), i, "slot id out of sync with its index");

        let Some(sprite) = slot.resolved_sprite().filter(|_| slot.visible) else {
            pri.visible = false;
            continue;
        };

        let (key, z) = pass.encoder.encode(sprite.tex_id, slot.sub_layer());
        pri.sort_key = key;
        pri.z = z;

        let (sin, cos) = slot.rotation.to_radians().sin_cos();
        for (v, out) in sprite.vertices.iter().zip(pri.position.iter_mut()) {
            let sheared = Vec2::new(
                (v.x + v.y * -slot.shear.y) * slot.scale.x,
                (v.y + v.x * -slot.shear.x) * slot.scale.y,
            );
            let world = frame.to_world_with(slot.position + sheared.rotated(sin, cos), psin, pcos);

            *out = frame.plane.to_world(world, z);
            fold.push(world);
        }

        let tint = slot.color * pass.color;
        for (c, corner) in pri.color.iter_mut().zip(pass.corner_colors) {
            *c = tint * corner;
        }

        pri.render_mode = pass.render_mode;
        pri.uv = sprite.uvs;
        pri.texture = sprite.texture;
        pri.tex_id = sprite.tex_id;
        pri.visible = pass.visible;
    }

    fold.finish_or(frame.origin)
}

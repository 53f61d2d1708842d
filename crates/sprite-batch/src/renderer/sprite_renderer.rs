use std::fmt;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::attach::{AttachmentRegistry, AttachmentSlot};
use crate::coords::{Aabb, Vec2, Vec3};
use crate::cull::{CullStats, CullingGroup, VisibilityCuller};
use crate::primitive::{Primitive, SpriteVertex};
use crate::scene::{AttachmentDriver, SceneNode, Sprite};
use crate::sort::{depth_axis_value, split_depth_axis, SortKeyEncoder, MAX_DEPTH};
use crate::transform::{apply_anchor, transform_attachments, PlaneFrame, TransformPass};

use super::{FramePhase, PrimitiveBatch, RendererConfig};

/// Callback run at the end of every successful apply.
pub type ApplyHook = Box<dyn FnMut(&PrimitiveBatch<'_>)>;

/// Owner ids occupy 30 bits of the sort key.
const OWNER_ID_MASK: u32 = 0x3fff_ffff;

/// Batches the sprites attached to one scene node.
///
/// Single-threaded and call-driven: `apply`, `attach`, `detach` and `cull` must not
/// interleave on the same renderer. A multi-threaded host serializes calls per
/// renderer.
pub struct SpriteRenderer {
    config: RendererConfig,
    registry: AttachmentRegistry,
    encoder: SortKeyEncoder,

    bounds: Aabb,
    radius: f32,
    anchor_offset: Vec2,
    layer: u32,

    visible: bool,
    enabled: bool,
    initialized: bool,
    /// Visibility handed to the batch consumer; driven by apply and cull.
    group_visible: bool,
    /// Set by apply, cleared by tick; suppresses one automatic apply per frame.
    updated_since_tick: bool,
    warned_no_render_mode: bool,

    on_apply: Option<ApplyHook>,
}

impl SpriteRenderer {
    /// Creates a renderer from a validated configuration.
    ///
    /// The renderer starts enabled and visible; call [`init`](Self::init) once the
    /// owning node is available.
    pub fn new(config: RendererConfig) -> Result<Self> {
        config.validate().context("invalid sprite renderer configuration")?;

        let registry = AttachmentRegistry::new(config.initial_capacity, 0);

        Ok(Self {
            config,
            registry,
            encoder: SortKeyEncoder::new(),
            bounds: Aabb::default(),
            radius: 0.0,
            anchor_offset: Vec2::zero(),
            layer: 0,
            visible: true,
            enabled: true,
            initialized: false,
            group_visible: false,
            updated_since_tick: false,
            warned_no_render_mode: false,
            on_apply: None,
        })
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    /// Binds the renderer to its node and runs a first apply.
    pub fn init(&mut self, node: &mut dyn SceneNode) {
        let owner = node.instance_id() & OWNER_ID_MASK;
        if owner != node.instance_id() {
            log::warn!("instance id {} truncated to 30 bits for sort keys", node.instance_id());
        }
        self.registry.set_owner_id(owner);
        self.layer = node.layer();
        VisibilityCuller::new(&mut self.config.culling_groups).reset();
        self.initialized = true;

        log::debug!("sprite renderer {owner} initialized ({} attached)", self.registry.active_count());
        self.apply(node);
    }

    /// Detaches everything and forgets culling state.
    pub fn teardown(&mut self) {
        self.registry.clear();
        VisibilityCuller::new(&mut self.config.culling_groups).reset();
        self.group_visible = false;
        self.initialized = false;
        log::debug!("sprite renderer {} torn down", self.registry.owner_id());
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.group_visible &= enabled;
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Shows or hides the renderer in every view.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.group_visible &= visible;
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    // ── configuration ─────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Mutable access for per-frame tweaks (color, anchor, depth, culling groups, ...).
    ///
    /// Changes take effect on the next `apply` or `cull`.
    #[inline]
    pub fn config_mut(&mut self) -> &mut RendererConfig {
        &mut self.config
    }

    /// Replaces the culling groups. New groups write on their first evaluation.
    pub fn set_culling_groups(&mut self, groups: Vec<CullingGroup>) {
        self.config.culling_groups = groups;
    }

    #[inline]
    pub fn culling_groups(&self) -> &[CullingGroup] {
        &self.config.culling_groups
    }

    /// Installs or removes the callback run after every successful apply.
    pub fn set_on_apply(&mut self, hook: Option<ApplyHook>) {
        self.on_apply = hook;
    }

    // ── attachments ───────────────────────────────────────────────────────

    pub fn attach(&mut self, driver: Option<Arc<dyn AttachmentDriver>>) -> usize {
        self.registry.attach(driver)
    }

    pub fn attach_sprite(&mut self, sprite: Arc<Sprite>) -> usize {
        self.registry.attach_sprite(sprite)
    }

    /// Swap-removes slot `idx`; the last attachment takes its id.
    pub fn detach(&mut self, idx: usize) {
        self.registry.detach(idx);
    }

    #[inline]
    pub fn attach_count(&self) -> usize {
        self.registry.active_count()
    }

    #[inline]
    pub fn slot(&self, idx: usize) -> &AttachmentSlot {
        self.registry.slot(idx)
    }

    #[inline]
    pub fn slot_mut(&mut self, idx: usize) -> &mut AttachmentSlot {
        self.registry.slot_mut(idx)
    }

    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.registry.find_by_name(name)
    }

    pub fn find_by_path_hash(&self, hash: i32) -> Option<usize> {
        self.registry.find_by_path_hash(hash)
    }

    #[inline]
    pub fn registry(&self) -> &AttachmentRegistry {
        &self.registry
    }

    // ── output ────────────────────────────────────────────────────────────

    #[inline]
    pub fn primitives(&self) -> &[Primitive] {
        self.registry.active_primitives()
    }

    /// World AABB from the last apply, after anchoring.
    #[inline]
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// In-plane shift applied by the anchor in the last apply.
    #[inline]
    pub fn anchor_offset(&self) -> Vec2 {
        self.anchor_offset
    }

    /// Renderer-local to in-plane world mapping for `node` under the current config.
    pub fn frame(&self, node: &dyn SceneNode) -> PlaneFrame {
        PlaneFrame::resolve(
            node,
            self.config.plane,
            self.config.follow_hierarchy,
            self.config.scale_factor,
            self.config.local_scale,
            self.config.local_rotation,
        )
    }

    /// Layer used by the last apply.
    #[inline]
    pub fn layer(&self) -> u32 {
        self.layer
    }

    #[inline]
    pub fn is_group_visible(&self) -> bool {
        self.group_visible
    }

    pub fn batch(&self) -> PrimitiveBatch<'_> {
        PrimitiveBatch {
            owner_id: self.registry.owner_id(),
            plane: self.config.plane,
            primitives: self.registry.active_primitives(),
            bounds: self.bounds,
            radius: self.radius,
            visible: self.group_visible,
        }
    }

    /// Appends vertices of visible primitives in paint order. Returns the quad count.
    pub fn write_vertices(&mut self, out: &mut Vec<SpriteVertex>) -> usize {
        let active = self.registry.active_count();
        self.registry.primitives_mut().write_vertices(active, out)
    }

    // ── per-frame ─────────────────────────────────────────────────────────

    /// Recomputes every active primitive, the sort keys and the bounds.
    ///
    /// Returns `false` without touching any output when no render mode is set or
    /// the renderer is hidden or disabled.
    pub fn apply(&mut self, node: &mut dyn SceneNode) -> bool {
        let Some(setting) = self.config.render_mode else {
            if !self.warned_no_render_mode {
                log::debug!("apply skipped: no render mode on renderer {}", self.registry.owner_id());
                self.warned_no_render_mode = true;
            }
            return false;
        };
        self.warned_no_render_mode = false;

        self.group_visible = self.visible && self.enabled;
        if !self.group_visible {
            return false;
        }

        let plane = self.config.plane;
        let owner_id = self.registry.owner_id();

        if self.config.apply_depth_to_transform {
            let (layer, depth) = split_depth_axis(plane.depth_of(node.position()));
            node.set_layer(layer);
            self.config.depth = depth;
        }

        self.config.depth = self.config.depth.min(MAX_DEPTH);
        let depth = self.config.depth;
        let layer = node.layer();
        self.layer = layer;

        self.encoder.prepare(owner_id, layer, depth, setting);

        let frame = self.frame(&*node);

        let pass = TransformPass {
            frame,
            color: self.config.color,
            corner_colors: self.config.corner_colors,
            render_mode: setting.mode,
            visible: self.group_visible,
            encoder: &self.encoder,
        };
        let (slots, primitives) = self.registry.active_parts_mut();
        let aabb = transform_attachments(&pass, slots, primitives);

        if self.config.apply_depth_to_transform {
            let snapped = plane.with_depth(node.position(), depth_axis_value(layer, depth));
            node.set_position(snapped);
        }

        let (aabb, offset) = apply_anchor(self.config.anchor, plane, frame.origin, aabb, primitives);
        self.bounds = aabb;
        self.radius = aabb.radius();
        self.anchor_offset = offset;
        self.updated_since_tick = true;

        log::trace!(
            "applied renderer {owner_id}: {} primitives, bounds {:?}",
            slots.len(),
            self.bounds
        );

        if let Some(hook) = self.on_apply.as_mut() {
            let batch = PrimitiveBatch {
                owner_id,
                plane,
                primitives: self.registry.active_primitives(),
                bounds: self.bounds,
                radius: self.radius,
                visible: self.group_visible,
            };
            hook(&batch);
        }

        true
    }

    /// Host loop hook: applies in the configured phase unless `apply` already ran
    /// since the previous tick of that phase.
    pub fn tick(&mut self, phase: FramePhase, node: &mut dyn SceneNode) {
        if !self.config.update_mode.runs_in(phase) {
            return;
        }
        if !self.updated_since_tick {
            self.apply(node);
        }
        self.updated_since_tick = false;
    }

    /// Tests the renderer, or each culling group, against a view circle.
    ///
    /// `view_center` is projected onto the renderer plane. Without groups this only
    /// toggles renderer-level visibility. With groups the renderer stays visible and
    /// the groups toggle their attachments. A hidden or disabled renderer stays
    /// hidden and evaluates nothing.
    pub fn cull(&mut self, node: &dyn SceneNode, view_center: Vec3, view_radius: f32) -> CullStats {
        let plane = self.config.plane;
        let center = plane.project(view_center);

        self.group_visible = self.visible && self.enabled;
        if !self.group_visible {
            return CullStats::default();
        }

        let mut culler = VisibilityCuller::new(&mut self.config.culling_groups);
        if !culler.has_groups() {
            self.group_visible =
                VisibilityCuller::renderer_visible(center, view_radius, self.bounds.center(), self.radius);
            return CullStats::default();
        }

        let (slots, primitives) = self.registry.active_parts_mut();
        culler.cull_groups(node, plane, center, view_radius, slots, primitives)
    }
}

impl fmt::Debug for SpriteRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpriteRenderer")
            .field("owner_id", &self.registry.owner_id())
            .field("attached", &self.registry.active_count())
            .field("capacity", &self.registry.capacity())
            .field("bounds", &self.bounds)
            .field("radius", &self.radius)
            .field("visible", &self.visible)
            .field("enabled", &self.enabled)
            .field("group_visible", &self.group_visible)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::coords::Plane;
    use crate::renderer::UpdateMode;
    use crate::scene::{NamedDriver, NodeTransform, TextureHandle};
    use crate::transform::Anchor;

    fn quad(w: f32, h: f32) -> Arc<Sprite> {
        Arc::new(Sprite::quad("quad", w, h, TextureHandle(7), 3))
    }

    fn renderer_with(config: RendererConfig, sprites: usize) -> SpriteRenderer {
        let mut r = SpriteRenderer::new(config).unwrap();
        for _ in 0..sprites {
            r.attach_sprite(quad(2.0, 2.0));
        }
        r
    }

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-4, "{a} != {b}");
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn rejects_invalid_config() {
        let config = RendererConfig { scale_factor: f32::NAN, ..Default::default() };
        assert!(SpriteRenderer::new(config).is_err());
    }

    #[test]
    fn init_truncates_owner_and_applies() {
        let mut node = NodeTransform::new(0x4000_0005);
        let mut r = renderer_with(RendererConfig::default(), 1);
        r.init(&mut node);

        assert!(r.is_initialized());
        assert_eq!(r.registry().owner_id(), 5);
        assert_eq!(r.primitives()[0].sort_key.owner(), 5);
        assert!(r.primitives()[0].visible);
    }

    // ── apply ─────────────────────────────────────────────────────────────

    #[test]
    fn apply_without_render_mode_is_noop() {
        let config = RendererConfig { render_mode: None, ..Default::default() };
        let mut r = renderer_with(config, 1);
        let mut node = NodeTransform::new(1);

        assert!(!r.apply(&mut node));
        assert!(!r.primitives()[0].visible);
        assert!(!r.is_group_visible());
    }

    #[test]
    fn bounds_center_on_node_position() {
        let mut r = renderer_with(RendererConfig::default(), 1);
        let mut node = NodeTransform::new(1).at(Vec3::new(10.0, -4.0, 0.0));

        assert!(r.apply(&mut node));
        let c = r.bounds().center();
        assert_close(c.x, 10.0);
        assert_close(c.y, -4.0);
        assert_close(r.radius(), 2.0_f32.sqrt());
    }

    #[test]
    fn frame_maps_local_points_like_apply() {
        let config = RendererConfig {
            scale_factor: 2.0,
            local_rotation: 90.0,
            ..Default::default()
        };
        let mut r = renderer_with(config, 0);
        let idx = r.attach_sprite(quad(0.0, 0.0));
        r.slot_mut(idx).position = Vec2::new(1.0, 0.0);
        let mut node = NodeTransform::new(1).at(Vec3::new(5.0, 0.0, 0.0));
        r.apply(&mut node);

        let p = r.frame(&node).to_world(Vec2::new(1.0, 0.0));
        assert_close(p.x, 5.0);
        assert_close(p.y, 2.0);
        assert_close(r.bounds().center().x, p.x);
        assert_close(r.bounds().center().y, p.y);
    }

    #[test]
    fn anchor_is_not_cumulative() {
        let config = RendererConfig { anchor: Anchor::BottomRight, ..Default::default() };
        let mut r = renderer_with(config, 1);
        let mut node = NodeTransform::new(1);

        r.apply(&mut node);
        r.apply(&mut node);
        assert_close(r.anchor_offset().x, -1.0);
        assert_close(r.anchor_offset().y, 1.0);
        assert_close(r.bounds().max.x, 0.0);
        assert_close(r.bounds().min.y, 0.0);

        r.config_mut().anchor = Anchor::None;
        r.apply(&mut node);
        assert_eq!(r.anchor_offset(), Vec2::zero());
        assert_close(r.bounds().center().x, 0.0);
        assert_close(r.bounds().center().y, 0.0);
    }

    #[test]
    fn hidden_renderer_skips_apply() {
        let mut r = renderer_with(RendererConfig::default(), 1);
        let mut node = NodeTransform::new(1);

        r.set_visible(false);
        assert!(!r.apply(&mut node));

        r.set_visible(true);
        r.set_enabled(false);
        assert!(!r.apply(&mut node));
        assert!(!r.is_group_visible());

        r.set_enabled(true);
        assert!(r.apply(&mut node));
    }

    #[test]
    fn nearer_depth_sorts_later() {
        let mut node = NodeTransform::new(1);
        let mut near = renderer_with(RendererConfig { depth: 0, ..Default::default() }, 1);
        let mut far = renderer_with(RendererConfig { depth: 511, ..Default::default() }, 1);
        near.apply(&mut node);
        far.apply(&mut node);

        assert!(near.primitives()[0].sort_key > far.primitives()[0].sort_key);
        assert!(near.primitives()[0].z < far.primitives()[0].z);
    }

    // ── depth feedback ────────────────────────────────────────────────────

    #[test]
    fn depth_feedback_snaps_depth_axis() {
        let config = RendererConfig { apply_depth_to_transform: true, ..Default::default() };
        let mut r = renderer_with(config, 1);
        let mut node = NodeTransform::new(1).at(Vec3::new(3.0, 4.0, 130.3));

        r.apply(&mut node);
        assert_eq!(node.layer(), 2);
        assert_eq!(r.config().depth, 18);
        assert_eq!(r.layer(), 2);
        assert_eq!(node.position(), Vec3::new(3.0, 4.0, 130.25));
    }

    #[test]
    fn depth_feedback_negates_on_xz() {
        let config = RendererConfig {
            plane: Plane::XZ,
            apply_depth_to_transform: true,
            ..Default::default()
        };
        let mut r = renderer_with(config, 1);
        let mut node = NodeTransform::new(1).at(Vec3::new(1.0, -65.0, 2.0));

        r.apply(&mut node);
        assert_eq!(node.layer(), 1);
        assert_eq!(r.config().depth, 8);
        assert_eq!(node.position(), Vec3::new(1.0, -65.0, 2.0));
    }

    #[test]
    fn depth_feedback_clamps_negative_to_zero() {
        let config = RendererConfig { apply_depth_to_transform: true, ..Default::default() };
        let mut r = renderer_with(config, 1);
        let mut node = NodeTransform::new(1).at(Vec3::new(0.0, 0.0, -12.0));

        r.apply(&mut node);
        assert_eq!(node.layer(), 0);
        assert_eq!(node.position().z, 0.0);
    }

    // ── tick ──────────────────────────────────────────────────────────────

    #[test]
    fn tick_skips_when_already_applied() {
        let config = RendererConfig { update_mode: UpdateMode::LateUpdate, ..Default::default() };
        let mut r = renderer_with(config, 1);
        let mut node = NodeTransform::new(1);

        let count = Rc::new(Cell::new(0));
        let seen = count.clone();
        r.set_on_apply(Some(Box::new(move |_: &PrimitiveBatch<'_>| seen.set(seen.get() + 1))));

        r.tick(FramePhase::LateUpdate, &mut node);
        assert_eq!(count.get(), 1);

        r.apply(&mut node);
        r.tick(FramePhase::LateUpdate, &mut node);
        assert_eq!(count.get(), 2);

        r.tick(FramePhase::Update, &mut node);
        assert_eq!(count.get(), 2);

        r.tick(FramePhase::LateUpdate, &mut node);
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn hook_sees_visible_primitives() {
        let mut r = renderer_with(RendererConfig::default(), 2);
        r.slot_mut(1).visible = false;
        let mut node = NodeTransform::new(9);

        let seen = Rc::new(Cell::new(0));
        let out = seen.clone();
        r.set_on_apply(Some(Box::new(move |batch: &PrimitiveBatch<'_>| {
            assert_eq!(batch.owner_id, 0);
            out.set(batch.visible_count());
        })));

        r.apply(&mut node);
        assert_eq!(seen.get(), 1);
    }

    // ── culling ───────────────────────────────────────────────────────────

    #[test]
    fn cull_without_groups_toggles_renderer() {
        let mut r = renderer_with(RendererConfig::default(), 1);
        let mut node = NodeTransform::new(1);
        r.apply(&mut node);

        r.cull(&node, Vec3::new(4.0, 0.0, 0.0), 3.0);
        assert!(r.is_group_visible());

        r.cull(&node, Vec3::new(50.0, 0.0, 0.0), 3.0);
        assert!(!r.is_group_visible());
        assert!(!r.batch().visible);

        r.set_enabled(false);
        r.cull(&node, Vec3::zero(), 100.0);
        assert!(!r.is_group_visible());
    }

    #[test]
    fn cull_with_groups_toggles_attachments() {
        let config = RendererConfig {
            culling_groups: vec![
                CullingGroup::circle("left", Vec2::new(-100.0, 0.0), 5.0, vec![0]),
                CullingGroup::circle("right", Vec2::new(100.0, 0.0), 5.0, vec![1]),
            ],
            ..Default::default()
        };
        let mut r = renderer_with(config, 2);
        let mut node = NodeTransform::new(1);
        r.apply(&mut node);

        let stats = r.cull(&node, Vec3::new(-100.0, 0.0, 0.0), 10.0);
        assert_eq!(stats.groups_toggled, 2);
        assert!(r.is_group_visible());
        assert!(r.slot(0).visible && r.primitives()[0].visible);
        assert!(!r.slot(1).visible && !r.primitives()[1].visible);

        let stats = r.cull(&node, Vec3::new(-100.0, 0.0, 0.0), 10.0);
        assert_eq!(stats, CullStats::default());
    }

    #[test]
    fn cull_with_groups_keeps_disabled_renderer_hidden() {
        let config = RendererConfig {
            culling_groups: vec![CullingGroup::circle("all", Vec2::zero(), 5.0, vec![0])],
            ..Default::default()
        };
        let mut r = renderer_with(config, 1);
        let mut node = NodeTransform::new(1);
        r.apply(&mut node);

        r.set_enabled(false);
        let stats = r.cull(&node, Vec3::zero(), 10.0);
        assert_eq!(stats, CullStats::default());
        assert!(!r.batch().visible);

        r.set_enabled(true);
        r.set_visible(false);
        r.cull(&node, Vec3::zero(), 10.0);
        assert!(!r.is_group_visible());
        assert!(!r.culling_groups()[0].is_initialized());

        r.set_visible(true);
        let stats = r.cull(&node, Vec3::zero(), 10.0);
        assert!(r.batch().visible);
        assert_eq!(stats.groups_toggled, 1);
    }

    #[test]
    fn group_edits_through_config_take_effect() {
        let mut r = renderer_with(RendererConfig::default(), 2);
        let mut node = NodeTransform::new(1);
        r.apply(&mut node);

        r.config_mut()
            .culling_groups
            .push(CullingGroup::circle("far", Vec2::new(500.0, 0.0), 1.0, vec![1]));
        let stats = r.cull(&node, Vec3::zero(), 10.0);

        assert_eq!(stats, CullStats { groups_toggled: 1, writes: 1 });
        assert!(r.primitives()[0].visible);
        assert!(!r.slot(1).visible && !r.primitives()[1].visible);

        r.config_mut().culling_groups[0].center = Vec2::zero();
        r.cull(&node, Vec3::zero(), 10.0);
        assert!(r.slot(1).visible && r.primitives()[1].visible);
    }

    #[test]
    fn group_cull_leaves_spriteless_slot_undrawn() {
        let config = RendererConfig {
            culling_groups: vec![CullingGroup::circle("all", Vec2::zero(), 5.0, vec![0, 1])],
            ..Default::default()
        };
        let mut r = renderer_with(config, 1);
        r.attach(None);
        let mut node = NodeTransform::new(1);
        r.apply(&mut node);
        assert!(!r.primitives()[1].visible);

        r.cull(&node, Vec3::zero(), 10.0);
        assert!(!r.primitives()[1].visible);

        let mut out = Vec::new();
        assert_eq!(r.write_vertices(&mut out), 1);
    }

    // ── attachments ───────────────────────────────────────────────────────

    #[test]
    fn named_attachments_resolve() {
        let mut r = renderer_with(RendererConfig::default(), 0);
        let idx = r.attach(Some(Arc::new(NamedDriver::new("root/arm/hand"))));
        r.slot_mut(idx).set_sprite(Some(quad(1.0, 1.0)));

        assert_eq!(r.find_by_name("hand"), Some(idx));
        assert_eq!(r.find_by_name("root/arm/hand"), Some(idx));
        assert_eq!(r.find_by_name("foot"), None);
    }

    #[test]
    fn teardown_clears() {
        let mut r = renderer_with(RendererConfig::default(), 3);
        let mut node = NodeTransform::new(1);
        r.init(&mut node);

        r.teardown();
        assert_eq!(r.attach_count(), 0);
        assert!(r.primitives().is_empty());
        assert!(!r.is_initialized());
        assert!(!r.is_group_visible());
    }

    #[test]
    fn write_vertices_emits_quads() {
        let mut r = renderer_with(RendererConfig::default(), 2);
        let mut node = NodeTransform::new(1);
        r.apply(&mut node);

        let mut out = Vec::new();
        assert_eq!(r.write_vertices(&mut out), 2);
        assert_eq!(out.len(), 8);
    }
}

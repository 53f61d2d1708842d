use std::sync::Arc;

use anyhow::Result;
use sprite_batch::coords::{Plane, Vec2, Vec3};
use sprite_batch::cull::CullingGroup;
use sprite_batch::logging::{init_logging, LoggingConfig};
use sprite_batch::scene::{NamedDriver, NodeTransform, SceneNode, Sprite, TextureHandle};
use sprite_batch::sort::RenderModeSetting;
use sprite_batch::transform::Anchor;
use sprite_batch::{FramePhase, PrimitiveBatch, RendererConfig, SpriteRenderer, UpdateMode};

const ATLAS: TextureHandle = TextureHandle(1);

fn main() -> Result<()> {
    // The library default only shows sprite_batch itself; the demo logs too.
    init_logging(LoggingConfig {
        env_filter: Some(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())),
        ..Default::default()
    });

    let mut node = NodeTransform::new(42)
        .at(Vec3::new(0.0, 0.0, 70.0))
        .scaled(Vec3::new(2.0, 2.0, 1.0));

    let mut renderer = SpriteRenderer::new(RendererConfig {
        render_mode: Some(RenderModeSetting::alpha_blend()),
        update_mode: UpdateMode::LateUpdate,
        plane: Plane::XY,
        anchor: Anchor::BottomCenter,
        apply_depth_to_transform: true,
        initial_capacity: 2,
        culling_groups: vec![
            CullingGroup::rect("upper", Vec2::new(0.0, 40.0), Vec2::new(20.0, 20.0), vec![0, 1]),
            CullingGroup::circle("lower", Vec2::new(0.0, -40.0), 8.0, vec![2]),
        ],
        ..Default::default()
    })?;

    // Rig: a body with two limbs driven by the animation layer, plus a loose shadow.
    let body = Arc::new(Sprite::quad("body", 16.0, 24.0, ATLAS, 1));
    let limb = Arc::new(Sprite::quad("limb", 4.0, 12.0, ATLAS, 1));
    let shadow = Arc::new(Sprite::quad("shadow", 18.0, 6.0, TextureHandle(2), 2));

    for (path, sprite, offset, layer) in [
        ("hero/body", &body, Vec2::new(0.0, 40.0), 1),
        ("hero/body/arm", &limb, Vec2::new(8.0, 44.0), 2),
        ("hero/body/leg", &limb, Vec2::new(0.0, -40.0), 0),
    ] {
        let idx = renderer.attach(Some(Arc::new(NamedDriver::new(path))));
        let slot = renderer.slot_mut(idx);
        slot.set_sprite(Some(sprite.clone()));
        slot.position = offset;
        slot.layer = layer;
    }
    renderer.attach_sprite(shadow);

    renderer.set_on_apply(Some(Box::new(|batch: &PrimitiveBatch<'_>| {
        log::info!(
            "batch {}: {} of {} primitives visible, radius {:.2}",
            batch.owner_id,
            batch.visible_count(),
            batch.primitives.len(),
            batch.radius
        );
    })));

    renderer.init(&mut node);
    log::info!("node snapped to z={} layer={}", node.position().z, node.layer());

    let mut vertices = Vec::new();
    for frame in 0..3 {
        if let Some(arm) = renderer.find_by_name("arm") {
            renderer.slot_mut(arm).rotation = frame as f32 * 15.0;
        }

        renderer.tick(FramePhase::Update, &mut node);
        renderer.tick(FramePhase::LateUpdate, &mut node);

        let camera = Vec3::new(0.0, 80.0 - frame as f32 * 80.0, 0.0);
        let stats = renderer.cull(&node, camera, 60.0);

        vertices.clear();
        let quads = renderer.write_vertices(&mut vertices);
        log::info!(
            "frame {frame}: {quads} quads, {} vertex bytes, {} group(s) toggled",
            std::mem::size_of_val(vertices.as_slice()),
            stats.groups_toggled
        );
    }

    if let Some(leg) = renderer.find_by_name("hero/body/leg") {
        renderer.detach(leg);
        log::info!("detached leg, {} attachments remain", renderer.attach_count());
    }

    log::info!("{renderer:?}");
    renderer.teardown();
    Ok(())
}

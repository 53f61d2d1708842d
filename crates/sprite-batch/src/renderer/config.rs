use anyhow::{ensure, Result};

use crate::coords::{ColorRgba, Plane, Vec2};
use crate::cull::CullingGroup;
use crate::sort::{RenderModeSetting, MAX_DEPTH};
use crate::transform::Anchor;

use super::UpdateMode;

/// Sprite renderer configuration.
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// `None` makes every apply a no-op until a mode is set.
    pub render_mode: Option<RenderModeSetting>,
    pub update_mode: UpdateMode,
    pub plane: Plane,
    pub anchor: Anchor,
    pub scale_factor: f32,
    /// Renderer-local scale, applied on top of the node's hierarchy scale.
    pub local_scale: Vec2,
    /// Renderer-local rotation in degrees.
    pub local_rotation: f32,
    pub color: ColorRgba,
    /// Top-left, top-right, bottom-right, bottom-left multipliers.
    pub corner_colors: [ColorRgba; 4],
    /// Depth inside the node's layer, 0..=511. Clamped at apply.
    pub depth: u32,
    /// Derive layer/depth from the node's depth-axis position and snap it back.
    pub apply_depth_to_transform: bool,
    /// Fold the node's position, rotation and hierarchy scale into the output.
    pub follow_hierarchy: bool,
    pub initial_capacity: usize,
    pub culling_groups: Vec<CullingGroup>,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            render_mode: Some(RenderModeSetting::alpha_blend()),
            update_mode: UpdateMode::Manual,
            plane: Plane::XY,
            anchor: Anchor::None,
            scale_factor: 1.0,
            local_scale: Vec2::one(),
            local_rotation: 0.0,
            color: ColorRgba::white(),
            corner_colors: [ColorRgba::white(); 4],
            depth: 0,
            apply_depth_to_transform: false,
            follow_hierarchy: true,
            initial_capacity: 1,
            culling_groups: Vec::new(),
        }
    }
}

impl RendererConfig {
    /// Rejects values the pipeline cannot turn into finite geometry.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.initial_capacity >= 1, "initial_capacity must be at least 1");
        ensure!(self.scale_factor.is_finite(), "scale_factor must be finite, got {}", self.scale_factor);
        ensure!(self.local_scale.is_finite(), "local_scale must be finite, got {:?}", self.local_scale);
        ensure!(
            self.local_rotation.is_finite(),
            "local_rotation must be finite, got {}",
            self.local_rotation
        );
        ensure!(self.color.is_finite(), "color must be finite");
        ensure!(
            self.corner_colors.iter().all(|c| c.is_finite()),
            "corner colors must be finite"
        );

        for group in &self.culling_groups {
            ensure!(
                group.center.is_finite() && group.bounds.is_finite(),
                "culling group '{}' has non-finite geometry",
                group.name
            );
            ensure!(
                group.bounds.is_non_negative(),
                "culling group '{}' has negative extent",
                group.name
            );
        }

        if self.depth > MAX_DEPTH {
            log::warn!("depth {} exceeds {MAX_DEPTH} and will be clamped", self.depth);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(RendererConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let config = RendererConfig { initial_capacity: 0, ..Default::default() };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("initial_capacity"));
    }

    #[test]
    fn non_finite_scale_is_rejected() {
        let config = RendererConfig { scale_factor: f32::NAN, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn negative_group_extent_is_rejected() {
        let config = RendererConfig {
            culling_groups: vec![CullingGroup::circle("bad", Vec2::zero(), -1.0, vec![])],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("bad"));
    }

    #[test]
    fn oversized_depth_is_not_an_error() {
        let config = RendererConfig { depth: 4096, ..Default::default() };
        assert!(config.validate().is_ok());
    }
}

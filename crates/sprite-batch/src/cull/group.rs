use crate::coords::Vec2;

/// Extent of a culling group in node-local units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GroupBounds {
    /// Axis-aligned box; culls with its circumscribed circle.
    Rect { size: Vec2 },
    Circle { radius: f32 },
}

impl GroupBounds {
    /// World radius under the node's in-plane `scale`.
    pub fn world_radius(self, scale: Vec2) -> f32 {
        match self {
            GroupBounds::Rect { size } => {
                Vec2::new(size.x * scale.x * 0.5, size.y * scale.y * 0.5).length()
            }
            GroupBounds::Circle { radius } => radius * scale.x.abs().max(scale.y.abs()),
        }
    }

    pub fn is_finite(self) -> bool {
        match self {
            GroupBounds::Rect { size } => size.is_finite(),
            GroupBounds::Circle { radius } => radius.is_finite(),
        }
    }

    pub fn is_non_negative(self) -> bool {
        match self {
            GroupBounds::Rect { size } => size.x >= 0.0 && size.y >= 0.0,
            GroupBounds::Circle { radius } => radius >= 0.0,
        }
    }
}

/// Named region bundling attachments for coarse visibility toggling.
///
/// `last_visible`/`initialized` carry the result of the previous evaluation so a
/// group only writes to its attachments when it crosses the view boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct CullingGroup {
    pub name: String,
    /// Center in node-local in-plane coordinates.
    pub center: Vec2,
    pub bounds: GroupBounds,
    /// Attachment slot ids covered by this group.
    pub indices: Vec<usize>,
    last_visible: bool,
    initialized: bool,
}

impl CullingGroup {
    pub fn new(name: impl Into<String>, center: Vec2, bounds: GroupBounds, indices: Vec<usize>) -> Self {
        Self {
            name: name.into(),
            center,
            bounds,
            indices,
            last_visible: false,
            initialized: false,
        }
    }

    pub fn rect(name: impl Into<String>, center: Vec2, size: Vec2, indices: Vec<usize>) -> Self {
        Self::new(name, center, GroupBounds::Rect { size }, indices)
    }

    pub fn circle(name: impl Into<String>, center: Vec2, radius: f32, indices: Vec<usize>) -> Self {
        Self::new(name, center, GroupBounds::Circle { radius }, indices)
    }

    #[inline]
    pub fn last_visible(&self) -> bool {
        self.last_visible
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Forgets the previous result; the next evaluation writes unconditionally.
    pub fn reset(&mut self) {
        self.initialized = false;
        self.last_visible = false;
    }

    /// Records `visible` and reports whether attachments need to be written.
    pub(crate) fn settle(&mut self, visible: bool) -> bool {
        let changed = !self.initialized || self.last_visible != visible;
        self.last_visible = visible;
        self.initialized = true;
        changed
    }
}

/// Which host loop phase triggers an automatic apply.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum UpdateMode {
    /// Never applied automatically; the host calls `apply`.
    #[default]
    Manual,
    Update,
    LateUpdate,
    FixedUpdate,
}

/// Host loop phase passed to `SpriteRenderer::tick`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FramePhase {
    Update,
    LateUpdate,
    FixedUpdate,
}

impl UpdateMode {
    #[inline]
    pub fn runs_in(self, phase: FramePhase) -> bool {
        matches!(
            (self, phase),
            (UpdateMode::Update, FramePhase::Update)
                | (UpdateMode::LateUpdate, FramePhase::LateUpdate)
                | (UpdateMode::FixedUpdate, FramePhase::FixedUpdate)
        )
    }
}

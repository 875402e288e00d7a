/// Which tier resolved a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchStatus {
    HitLocal,
    HitRemote,
}

impl FetchStatus {
    /// Stable string label, suitable for logs and metrics dimensions.
    #[inline]
    pub fn as_label(&self) -> &'static str {
        match self {
            FetchStatus::HitLocal => "HIT_LOCAL",
            FetchStatus::HitRemote => "HIT_REMOTE",
        }
    }

    #[inline]
    pub fn is_local_hit(&self) -> bool {
        matches!(self, FetchStatus::HitLocal)
    }
}

impl std::fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

// crates/shared-kernel/src/value_objects/run_status.rs

/// Final outcome of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    /// At least one input file or line could not be handled.
    Failed,
    /// The output directory became unusable and the run was aborted.
    FatalOutput,
}

impl RunStatus {
    #[inline]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Failed => 1,
            Self::FatalOutput => 3,
        }
    }

    #[inline]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

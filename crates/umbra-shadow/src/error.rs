//! Shadow math error types.

/// Errors reported when a shadow matrix cannot be built from its inputs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShadowError {
    /// An input is non-finite, out of range, or geometrically degenerate.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the input.
        reason: &'static str,
    },
}

impl ShadowError {
    pub(crate) fn invalid(reason: &'static str) -> Self {
        Self::InvalidArgument { reason }
    }
}

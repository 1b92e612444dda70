//! Tessellation error types.

/// Errors reported by the sphere tessellator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeshError {
    /// The requested subdivision level is negative.
    #[error("invalid subdivision level {level}: must be >= 0")]
    InvalidArgument {
        /// The rejected level.
        level: i32,
    },
}

//! Error types for boolean compositing.

use thiserror::Error;

/// Result type for compositing operations.
pub type ComposeResult<T> = Result<T, ComposeError>;

/// Errors that can occur during boolean evaluation.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// A boolean operand has no vertices or faces.
    #[error("boolean operand is empty")]
    EmptyMesh,

    /// The kernel returned empty or near-zero-volume geometry.
    #[error("{operation} produced degenerate geometry")]
    DegenerateResult {
        /// Which boolean operation failed.
        operation: &'static str,
    },

    /// The final figurine/pedestal union failed. Unlike engraving
    /// subtractions there is no partial result to fall back to.
    #[error("union of figurine and pedestal failed: {reason}")]
    UnionFailed {
        /// Underlying failure description.
        reason: String,
    },
}

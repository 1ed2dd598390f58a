//! Error types for figurine normalization.

use thiserror::Error;

/// Result type for normalization operations.
pub type NormalizeResult<T> = Result<T, NormalizeError>;

/// Errors that can occur while normalizing a figurine mesh.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// Mesh has no vertices or no faces.
    #[error("cannot normalize an empty mesh")]
    EmptyMesh,

    /// Mesh contains a non-finite coordinate.
    #[error("non-finite coordinate at vertex {index}")]
    NonFiniteVertex {
        /// Index of the offending vertex.
        index: usize,
    },
}

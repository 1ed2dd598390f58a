//! Error types for material estimation.

use thiserror::Error;

/// Result type for estimation operations.
pub type EstimateResult<T> = Result<T, EstimateError>;

/// Errors that can occur while estimating printed material.
#[derive(Debug, Error)]
pub enum EstimateError {
    /// Mesh has no vertices or faces.
    #[error("cannot estimate an empty mesh")]
    EmptyMesh,

    /// Mesh is not a closed, consistently oriented solid; the
    /// divergence-theorem volume would be meaningless.
    #[error(
        "mesh is not a closed solid: {boundary_edges} boundary edges, \
         {non_manifold_edges} non-manifold edges"
    )]
    OpenMesh {
        /// Edges bordering exactly one face.
        boundary_edges: usize,
        /// Edges bordering more than two faces, or two faces wound the
        /// same direction.
        non_manifold_edges: usize,
    },

    /// Signed volume is negative: normals point inward.
    #[error("mesh is inside-out (signed volume {volume})")]
    InsideOut {
        /// The negative signed volume found.
        volume: f64,
    },
}

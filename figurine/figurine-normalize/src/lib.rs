//! Ground and center incoming figurine meshes.
//!
//! Meshes arrive from the generation service in an arbitrary pose: floating
//! above or sunk below the ground plane, off-center on the plate. Every
//! downstream stage (pedestal sizing, engraving placement, boolean
//! compositing) assumes the figurine stands on `y = 0` with its footprint
//! centered on the origin; this crate establishes that frame.
//!
//! # Quick Start
//!
//! ```
//! use figurine_normalize::normalize;
//! use figurine_types::{cuboid, MeshBounds};
//!
//! let mut brick = cuboid(2.0, 3.0, 2.0);
//! brick.translate(figurine_types::Vector3::new(5.0, -7.0, 1.5));
//!
//! let grounded = normalize(&brick).unwrap();
//! assert!(grounded.bounds.min.y.abs() < 1e-9);
//! assert!(grounded.bounds.center().x.abs() < 1e-9);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;

pub use error::{NormalizeError, NormalizeResult};

use figurine_types::{Aabb, IndexedMesh, MeshBounds, MeshTopology, Vector3};
use tracing::debug;

/// Displacements below this are not applied.
///
/// Re-normalizing an already-normalized mesh must be a bitwise no-op;
/// repeatedly applying sub-epsilon corrections would otherwise accumulate
/// floating-point drift across recomputes.
pub const GROUND_EPSILON: f64 = 1e-3;

/// A figurine mesh in the canonical frame, with its recomputed bounds.
///
/// Invariants: `bounds.min.y`, `bounds.center().x` and `bounds.center().z`
/// are each within [`GROUND_EPSILON`] of zero.
#[derive(Debug, Clone)]
pub struct NormalizedFigurine {
    /// The grounded, centered mesh.
    pub mesh: IndexedMesh,
    /// Bounds of `mesh`, recomputed after translation.
    pub bounds: Aabb,
}

/// Ground a figurine mesh and center its footprint on the origin.
///
/// Translates the mesh so its lowest point sits on `y = 0` and its
/// bounding-box center lies on the Y axis. Vertex attributes and face
/// indices are untouched; only positions move. When the mesh is already
/// within [`GROUND_EPSILON`] of the canonical frame on every axis, vertex
/// data passes through bitwise identical.
///
/// # Errors
///
/// - [`NormalizeError::EmptyMesh`] if the mesh has no vertices or faces.
/// - [`NormalizeError::NonFiniteVertex`] if any coordinate is NaN or
///   infinite; translation amounts would be meaningless.
pub fn normalize(mesh: &IndexedMesh) -> NormalizeResult<NormalizedFigurine> {
    if mesh.is_empty() {
        return Err(NormalizeError::EmptyMesh);
    }

    for (index, vertex) in mesh.vertices.iter().enumerate() {
        let p = &vertex.position;
        if !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite()) {
            return Err(NormalizeError::NonFiniteVertex { index });
        }
    }

    let bounds = mesh.bounds();
    let center = bounds.center();
    let offset = Vector3::new(-center.x, -bounds.min.y, -center.z);

    if offset.x.abs() <= GROUND_EPSILON
        && offset.y.abs() <= GROUND_EPSILON
        && offset.z.abs() <= GROUND_EPSILON
    {
        return Ok(NormalizedFigurine {
            mesh: mesh.clone(),
            bounds,
        });
    }

    debug!(
        dx = offset.x,
        dy = offset.y,
        dz = offset.z,
        "grounding figurine"
    );

    let mut grounded = mesh.clone();
    grounded.translate(offset);
    let bounds = grounded.bounds();

    Ok(NormalizedFigurine {
        mesh: grounded,
        bounds,
    })
}

//! The boolean evaluator over the `csgrs` kernel.

use csgrs::traits::CSG;
use csgrs::float_types::parry3d::na::{Point3 as CsgPoint3, Vector3 as CsgVector3};
use csgrs::float_types::Real;
use csgrs::mesh::polygon::Polygon;
use csgrs::mesh::vertex::Vertex as CsgVertex;
use csgrs::mesh::Mesh as CsgMesh;
use figurine_types::{IndexedMesh, MeshTopology, Vertex};
use tracing::debug;

use crate::error::{ComposeError, ComposeResult};

/// Results with volume below this count as degenerate.
const MIN_RESULT_VOLUME: f64 = 1e-9;

/// Explicitly constructed boolean evaluator.
///
/// Owns nothing mutable; constructing one per composition is cheap and
/// keeps evaluation free of hidden shared state. All conversions in and
/// out of the kernel go through raw `f64` components so the kernel's
/// bundled math types never appear in the public API.
#[derive(Debug, Default)]
pub struct Evaluator {
    _private: (),
}

impl Evaluator {
    /// Create an evaluator.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Subtract `tool` from `target`.
    ///
    /// # Errors
    ///
    /// [`ComposeError::EmptyMesh`] for empty operands,
    /// [`ComposeError::DegenerateResult`] if the difference collapses.
    pub fn subtract(
        &self,
        target: &IndexedMesh,
        tool: &IndexedMesh,
    ) -> ComposeResult<IndexedMesh> {
        let (a, b) = (to_kernel(target)?, to_kernel(tool)?);
        let result = from_kernel(&a.difference(&b));
        check_result(result, "subtraction")
    }

    /// Union `a` with `b`.
    ///
    /// # Errors
    ///
    /// [`ComposeError::EmptyMesh`] for empty operands,
    /// [`ComposeError::DegenerateResult`] if the union collapses.
    pub fn union(&self, a: &IndexedMesh, b: &IndexedMesh) -> ComposeResult<IndexedMesh> {
        let (ka, kb) = (to_kernel(a)?, to_kernel(b)?);
        let result = from_kernel(&ka.union(&kb));
        check_result(result, "union")
    }
}

fn check_result(mesh: IndexedMesh, operation: &'static str) -> ComposeResult<IndexedMesh> {
    let volume = mesh.volume();
    if mesh.is_empty() || volume < MIN_RESULT_VOLUME {
        return Err(ComposeError::DegenerateResult { operation });
    }
    debug!(
        operation,
        faces = mesh.face_count(),
        volume,
        "boolean evaluated"
    );
    Ok(mesh)
}

#[allow(clippy::cast_possible_truncation)]
fn to_kernel(mesh: &IndexedMesh) -> ComposeResult<CsgMesh<()>> {
    if mesh.is_empty() {
        return Err(ComposeError::EmptyMesh);
    }

    let mut polygons = Vec::with_capacity(mesh.face_count());
    for tri in mesh.triangles() {
        let Some(normal) = tri.normal() else {
            continue; // sanitize removes these; belt for unsanitized input
        };
        let n = CsgVector3::new(normal.x as Real, normal.y as Real, normal.z as Real);
        let vertices: Vec<CsgVertex> = tri
            .vertices()
            .iter()
            .map(|p| {
                CsgVertex::new(CsgPoint3::new(p.x as Real, p.y as Real, p.z as Real), n)
            })
            .collect();
        polygons.push(Polygon::new(vertices, None));
    }

    if polygons.is_empty() {
        return Err(ComposeError::EmptyMesh);
    }
    Ok(CsgMesh::from_polygons(&polygons, None))
}

/// Rebuild an indexed mesh from kernel polygons.
///
/// Vertices are not deduplicated; the estimator's closure check operates
/// on positions, not indices, so duplicated corners are harmless.
fn from_kernel(mesh: &CsgMesh<()>) -> IndexedMesh {
    let mut out = IndexedMesh::new();

    for polygon in &mesh.polygons {
        let base = out.vertices.len();
        for vertex in &polygon.vertices {
            out.vertices.push(Vertex::from_coords(
                f64::from(vertex.pos.x),
                f64::from(vertex.pos.y),
                f64::from(vertex.pos.z),
            ));
        }
        let n = polygon.vertices.len();
        if n < 3 {
            continue;
        }
        // Fan triangulation of the (convex, planar) kernel polygon
        #[allow(clippy::cast_possible_truncation)]
        for i in 1..n - 1 {
            out.faces.push([
                base as u32,
                (base + i) as u32,
                (base + i + 1) as u32,
            ]);
        }
    }

    out
}

//! Closure and orientation validation.

use figurine_types::{IndexedMesh, MeshTopology};
use hashbrown::HashMap;

use crate::error::{EstimateError, EstimateResult};

/// Position welding tolerance in mm.
///
/// Boolean output duplicates vertices at polygon corners; edges only
/// pair up once coincident positions are treated as one.
const WELD_QUANTUM: f64 = 1e-6;

#[derive(Default)]
struct EdgeUse {
    forward: usize,
    backward: usize,
}

fn quantize(value: f64) -> i64 {
    #[allow(clippy::cast_possible_truncation)]
    let q = (value / WELD_QUANTUM).round() as i64;
    q
}

/// Check that the mesh is a closed, consistently oriented solid.
///
/// Welds coincident vertex positions, then requires every undirected
/// edge to be used by exactly two faces traversing it in opposite
/// directions. That single condition catches holes (boundary edges),
/// fins (over-shared edges), and inconsistent winding — everything that
/// would silently corrupt the divergence-theorem volume.
///
/// # Errors
///
/// [`EstimateError::EmptyMesh`] or [`EstimateError::OpenMesh`].
pub fn validate_closed(mesh: &IndexedMesh) -> EstimateResult<()> {
    if mesh.is_empty() {
        return Err(EstimateError::EmptyMesh);
    }

    // Weld positions to canonical ids
    let mut position_ids: HashMap<(i64, i64, i64), u32> = HashMap::new();
    let mut welded: Vec<u32> = Vec::with_capacity(mesh.vertex_count());
    for vertex in &mesh.vertices {
        let key = (
            quantize(vertex.position.x),
            quantize(vertex.position.y),
            quantize(vertex.position.z),
        );
        #[allow(clippy::cast_possible_truncation)]
        let next_id = position_ids.len() as u32;
        let id = *position_ids.entry(key).or_insert(next_id);
        welded.push(id);
    }

    let mut edges: HashMap<(u32, u32), EdgeUse> = HashMap::new();
    for face in mesh.faces() {
        let ids = [
            welded[face[0] as usize],
            welded[face[1] as usize],
            welded[face[2] as usize],
        ];
        if ids[0] == ids[1] || ids[1] == ids[2] || ids[2] == ids[0] {
            continue; // degenerate after welding; carries no area
        }
        for (a, b) in [(ids[0], ids[1]), (ids[1], ids[2]), (ids[2], ids[0])] {
            let entry = edges.entry((a.min(b), a.max(b))).or_default();
            if a < b {
                entry.forward += 1;
            } else {
                entry.backward += 1;
            }
        }
    }

    let mut boundary_edges = 0;
    let mut non_manifold_edges = 0;
    for usage in edges.values() {
        let total = usage.forward + usage.backward;
        if total == 1 {
            boundary_edges += 1;
        } else if total != 2 || usage.forward != 1 {
            // Either over-shared, or two faces traverse it the same way
            non_manifold_edges += 1;
        }
    }

    if boundary_edges > 0 || non_manifold_edges > 0 {
        return Err(EstimateError::OpenMesh {
            boundary_edges,
            non_manifold_edges,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use figurine_types::{cuboid, unit_cube, uv_sphere, Vertex};

    #[test]
    fn closed_primitives_pass() {
        assert!(validate_closed(&unit_cube()).is_ok());
        assert!(validate_closed(&cuboid(2.0, 3.0, 4.0)).is_ok());
        assert!(validate_closed(&uv_sphere(1.0, 16, 32)).is_ok());
    }

    #[test]
    fn missing_face_reports_boundary_edges() {
        let mut cube = unit_cube();
        cube.faces.pop();

        match validate_closed(&cube) {
            Err(EstimateError::OpenMesh {
                boundary_edges, ..
            }) => assert_eq!(boundary_edges, 3),
            other => panic!("expected OpenMesh, got {other:?}"),
        }
    }

    #[test]
    fn flipped_face_reports_non_manifold_edges() {
        let mut cube = unit_cube();
        cube.faces[0].swap(1, 2);

        match validate_closed(&cube) {
            Err(EstimateError::OpenMesh {
                non_manifold_edges, ..
            }) => assert_eq!(non_manifold_edges, 3),
            other => panic!("expected OpenMesh, got {other:?}"),
        }
    }

    #[test]
    fn duplicated_corner_vertices_weld_together() {
        // Rebuild the cube with per-face vertices, as boolean output has
        let cube = unit_cube();
        let mut soup = figurine_types::IndexedMesh::new();
        for tri in figurine_types::MeshTopology::triangles(&cube) {
            #[allow(clippy::cast_possible_truncation)]
            let base = soup.vertices.len() as u32;
            soup.vertices.push(Vertex::new(tri.v0));
            soup.vertices.push(Vertex::new(tri.v1));
            soup.vertices.push(Vertex::new(tri.v2));
            soup.faces.push([base, base + 1, base + 2]);
        }
        assert!(validate_closed(&soup).is_ok());
    }

    #[test]
    fn empty_mesh_rejected() {
        assert!(matches!(
            validate_closed(&figurine_types::IndexedMesh::new()),
            Err(EstimateError::EmptyMesh)
        ));
    }
}

//! Flat text block construction: caps plus extruded walls.

use figurine_types::{IndexedMesh, MeshBounds, Vertex, Vector3};
use rusttype::{point as rt_point, Scale};
use tracing::debug;

use crate::error::{EngraveError, EngraveResult};
use crate::outline::{group_rings, signed_area, OutlineFlattener, RingGroup};
use crate::typeface::Typeface;

/// Build a closed prism from grouped glyph rings.
///
/// Back caps sit on `z = 0`, front caps on `z = depth`; walls connect the
/// two. Assumes outers wound CCW and holes CW, as produced by
/// [`group_rings`].
#[allow(clippy::cast_possible_truncation)]
fn prism_from_groups(groups: &[RingGroup], depth: f64) -> EngraveResult<IndexedMesh> {
    let mut mesh = IndexedMesh::new();

    for group in groups {
        let rings: Vec<&Vec<[f64; 2]>> =
            std::iter::once(&group.outer).chain(group.holes.iter()).collect();
        let total: usize = rings.iter().map(|r| r.len()).sum();

        // Flat coordinate array and hole offsets for earcut
        let mut coords = Vec::with_capacity(total * 2);
        let mut hole_indices = Vec::with_capacity(group.holes.len());
        let mut offset = 0;
        for (ring_idx, ring) in rings.iter().enumerate() {
            if ring_idx > 0 {
                hole_indices.push(offset);
            }
            for &[x, y] in ring.iter() {
                coords.push(x);
                coords.push(y);
            }
            offset += ring.len();
        }

        let cap = earcutr::earcut(&coords, &hole_indices, 2)
            .map_err(|e| EngraveError::Triangulation(format!("{e}")))?;
        if cap.is_empty() {
            return Err(EngraveError::Triangulation(
                "no cap triangles produced".to_owned(),
            ));
        }

        let back_base = mesh.vertices.len() as u32;
        let front_base = back_base + total as u32;
        for &[x, y] in rings.iter().flat_map(|r| r.iter()) {
            mesh.vertices.push(Vertex::from_coords(x, y, 0.0));
        }
        for &[x, y] in rings.iter().flat_map(|r| r.iter()) {
            mesh.vertices.push(Vertex::from_coords(x, y, depth));
        }

        // Caps. Normalize each earcut triangle to CCW in the plane, then
        // front faces +Z as-is and back gets the reverse.
        for tri in cap.chunks_exact(3) {
            let (mut a, mut b, c) = (tri[0], tri[1], tri[2]);
            let area2 = (coords[2 * b] - coords[2 * a])
                * (coords[2 * c + 1] - coords[2 * a + 1])
                - (coords[2 * c] - coords[2 * a]) * (coords[2 * b + 1] - coords[2 * a + 1]);
            if area2 < 0.0 {
                std::mem::swap(&mut a, &mut b);
            }
            mesh.faces.push([
                front_base + a as u32,
                front_base + b as u32,
                front_base + c as u32,
            ]);
            mesh.faces.push([
                back_base + a as u32,
                back_base + c as u32,
                back_base + b as u32,
            ]);
        }

        // Walls. With outers CCW and holes CW the same quad winding
        // faces outward for both.
        let mut ring_offset = 0u32;
        for ring in &rings {
            let m = ring.len() as u32;
            for k in 0..m {
                let kn = (k + 1) % m;
                let a = back_base + ring_offset + k;
                let b = back_base + ring_offset + kn;
                let c = front_base + ring_offset + kn;
                let d = front_base + ring_offset + k;
                mesh.faces.push([a, b, c]);
                mesh.faces.push([a, c, d]);
            }
            ring_offset += m;
        }
    }

    Ok(mesh)
}

/// Typeset one line of text as a closed, centered prism.
///
/// Glyph outlines are laid out at `size`, flattened, triangulated, and
/// extruded to `depth` along +Z. The block is centered about its 2D
/// bounding box, then recessed by `depth_offset` along -Z so that once
/// wrapped it sinks below the pedestal surface.
///
/// # Errors
///
/// - [`EngraveError::NoGlyphGeometry`] if no character produced outlines.
/// - [`EngraveError::Triangulation`] if a cap could not be triangulated.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn typeset_line(
    typeface: &Typeface,
    text: &str,
    size: f64,
    depth: f64,
    depth_offset: f64,
) -> EngraveResult<IndexedMesh> {
    let scale = Scale::uniform(size as f32);
    let mut flattener = OutlineFlattener::new();

    for glyph in typeface.font.layout(text, scale, rt_point(0.0, 0.0)) {
        glyph.build_outline(&mut flattener);
    }

    let groups = group_rings(flattener.contours);
    if groups.is_empty() {
        return Err(EngraveError::NoGlyphGeometry);
    }

    let cap_area: f64 = groups
        .iter()
        .map(|g| signed_area(&g.outer) + g.holes.iter().map(|h| signed_area(h)).sum::<f64>())
        .sum();
    debug!(text, rings = groups.len(), cap_area, "typeset line");

    let mut block = prism_from_groups(&groups, depth)?;

    let bounds = block.bounds();
    let center = bounds.center();
    block.translate(Vector3::new(-center.x, -center.y, -depth_offset));

    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::RingGroup;
    use figurine_types::MeshTopology;

    fn square(half: f64) -> Vec<[f64; 2]> {
        vec![
            [-half, -half],
            [half, -half],
            [half, half],
            [-half, half],
        ]
    }

    #[test]
    fn solid_square_prism_is_closed() {
        let groups = vec![RingGroup {
            outer: square(1.0),
            holes: vec![],
        }];
        let prism = prism_from_groups(&groups, 0.5).expect("prism");

        // 2x2 square extruded 0.5: volume 2.0
        let vol = prism.signed_volume();
        assert!((vol - 2.0).abs() < 1e-9, "volume was {vol}");
    }

    #[test]
    fn prism_with_hole_subtracts_volume() {
        let mut hole = square(0.5);
        hole.reverse(); // CW
        let groups = vec![RingGroup {
            outer: square(1.0),
            holes: vec![hole],
        }];
        let prism = prism_from_groups(&groups, 1.0).expect("prism");

        // (4 - 1) * 1.0
        let vol = prism.signed_volume();
        assert!((vol - 3.0).abs() < 1e-9, "volume was {vol}");
    }

    #[test]
    fn prism_edges_all_shared_twice() {
        use std::collections::HashMap;

        let mut hole = square(0.4);
        hole.reverse();
        let groups = vec![RingGroup {
            outer: square(1.0),
            holes: vec![hole],
        }];
        let prism = prism_from_groups(&groups, 0.06).expect("prism");

        let mut edges: HashMap<(u32, u32), i32> = HashMap::new();
        for face in prism.faces() {
            for (a, b) in [
                (face[0], face[1]),
                (face[1], face[2]),
                (face[2], face[0]),
            ] {
                *edges.entry((a.min(b), a.max(b))).or_insert(0) += 1;
            }
        }
        assert!(edges.values().all(|&n| n == 2));
    }

    #[test]
    fn two_disjoint_outers_sum_volumes() {
        let mut left = square(0.5);
        for p in &mut left {
            p[0] -= 2.0;
        }
        let mut right = square(0.5);
        for p in &mut right {
            p[0] += 2.0;
        }
        let groups = vec![
            RingGroup {
                outer: left,
                holes: vec![],
            },
            RingGroup {
                outer: right,
                holes: vec![],
            },
        ];
        let prism = prism_from_groups(&groups, 1.0).expect("prism");
        assert!((prism.signed_volume() - 2.0).abs() < 1e-9);
    }
}

//! Primitive mesh builders.
//!
//! Closed reference solids used as fixtures and fallback geometry
//! throughout the pipeline.

use crate::{IndexedMesh, Vertex};
use nalgebra::Point3;

/// Create a unit cube mesh.
///
/// The cube spans (0,0,0) to (1,1,1) with outward-facing normals.
///
/// # Example
///
/// ```
/// use figurine_types::{unit_cube, MeshTopology};
///
/// let cube = unit_cube();
/// assert_eq!(cube.vertex_count(), 8);
/// assert_eq!(cube.face_count(), 12);
/// ```
#[must_use]
pub fn unit_cube() -> IndexedMesh {
    let mut mesh = IndexedMesh::with_capacity(8, 12);

    mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0)); // 0
    mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0)); // 1
    mesh.vertices.push(Vertex::from_coords(1.0, 1.0, 0.0)); // 2
    mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0)); // 3
    mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 1.0)); // 4
    mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 1.0)); // 5
    mesh.vertices.push(Vertex::from_coords(1.0, 1.0, 1.0)); // 6
    mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 1.0)); // 7

    // 12 triangles (2 per face), CCW winding when viewed from outside

    // Back face (z=0) - normal points -Z
    mesh.faces.push([0, 2, 1]);
    mesh.faces.push([0, 3, 2]);

    // Front face (z=1) - normal points +Z
    mesh.faces.push([4, 5, 6]);
    mesh.faces.push([4, 6, 7]);

    // Bottom face (y=0) - normal points -Y
    mesh.faces.push([0, 1, 5]);
    mesh.faces.push([0, 5, 4]);

    // Top face (y=1) - normal points +Y
    mesh.faces.push([3, 7, 6]);
    mesh.faces.push([3, 6, 2]);

    // Left face (x=0) - normal points -X
    mesh.faces.push([0, 4, 7]);
    mesh.faces.push([0, 7, 3]);

    // Right face (x=1) - normal points +X
    mesh.faces.push([1, 2, 6]);
    mesh.faces.push([1, 6, 5]);

    mesh
}

/// Create an axis-aligned box centered at the origin.
///
/// # Arguments
///
/// * `size_x` - Width (X extent)
/// * `size_y` - Height (Y extent)
/// * `size_z` - Depth (Z extent)
///
/// # Example
///
/// ```
/// use figurine_types::cuboid;
///
/// let brick = cuboid(2.0, 1.0, 3.0);
/// assert!((brick.volume() - 6.0).abs() < 1e-10);
/// ```
#[must_use]
pub fn cuboid(size_x: f64, size_y: f64, size_z: f64) -> IndexedMesh {
    let mut mesh = unit_cube();
    for vertex in &mut mesh.vertices {
        vertex.position.x = (vertex.position.x - 0.5) * size_x;
        vertex.position.y = (vertex.position.y - 0.5) * size_y;
        vertex.position.z = (vertex.position.z - 0.5) * size_z;
    }
    mesh
}

/// Create a UV sphere centered at the origin.
///
/// Poles sit on the Y axis. The mesh is closed, with CCW winding
/// when viewed from outside.
///
/// # Arguments
///
/// * `radius` - Sphere radius
/// * `rings` - Number of latitude subdivisions (>= 2)
/// * `segments` - Number of longitude subdivisions (>= 3)
///
/// Degenerate subdivision counts are clamped to the minimums.
///
/// # Example
///
/// ```
/// use figurine_types::uv_sphere;
///
/// let sphere = uv_sphere(1.0, 32, 64);
/// let exact = 4.0 / 3.0 * std::f64::consts::PI;
/// // Inscribed polyhedron volume converges to the analytic value
/// assert!((sphere.volume() - exact).abs() / exact < 0.01);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn uv_sphere(radius: f64, rings: usize, segments: usize) -> IndexedMesh {
    let rings = rings.max(2);
    let segments = segments.max(3);

    let vertex_count = 2 + (rings - 1) * segments;
    let face_count = 2 * segments + 2 * (rings.saturating_sub(2)) * segments;
    let mut mesh = IndexedMesh::with_capacity(vertex_count, face_count);

    // Top pole, latitude rings, bottom pole.
    mesh.vertices
        .push(Vertex::new(Point3::new(0.0, radius, 0.0)));
    for i in 1..rings {
        #[allow(clippy::cast_precision_loss)]
        let theta = std::f64::consts::PI * (i as f64) / (rings as f64);
        for j in 0..segments {
            #[allow(clippy::cast_precision_loss)]
            let phi = std::f64::consts::TAU * (j as f64) / (segments as f64);
            mesh.vertices.push(Vertex::new(Point3::new(
                radius * theta.sin() * phi.cos(),
                radius * theta.cos(),
                radius * theta.sin() * phi.sin(),
            )));
        }
    }
    mesh.vertices
        .push(Vertex::new(Point3::new(0.0, -radius, 0.0)));

    let ring_start = |i: usize| 1 + (i - 1) * segments;
    let bottom_pole = (1 + (rings - 1) * segments) as u32;

    // Top cap fan
    for j in 0..segments {
        let a = (ring_start(1) + j) as u32;
        let b = (ring_start(1) + (j + 1) % segments) as u32;
        mesh.faces.push([0, b, a]);
    }

    // Quad strips between consecutive rings
    for i in 1..rings - 1 {
        for j in 0..segments {
            let jn = (j + 1) % segments;
            let upper = (ring_start(i) + j) as u32;
            let upper_n = (ring_start(i) + jn) as u32;
            let lower = (ring_start(i + 1) + j) as u32;
            let lower_n = (ring_start(i + 1) + jn) as u32;

            mesh.faces.push([upper, lower_n, lower]);
            mesh.faces.push([upper, upper_n, lower_n]);
        }
    }

    // Bottom cap fan
    for j in 0..segments {
        let a = (ring_start(rings - 1) + j) as u32;
        let b = (ring_start(rings - 1) + (j + 1) % segments) as u32;
        mesh.faces.push([bottom_pole, a, b]);
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MeshBounds, MeshTopology};

    #[test]
    fn cuboid_volume_and_bounds() {
        let brick = cuboid(2.0, 4.0, 6.0);
        assert!((brick.signed_volume() - 48.0).abs() < 1e-10);

        let bounds = brick.bounds();
        assert!((bounds.min.y - (-2.0)).abs() < 1e-12);
        assert!((bounds.max.y - 2.0).abs() < 1e-12);
    }

    #[test]
    fn sphere_counts() {
        let sphere = uv_sphere(1.0, 4, 8);
        assert_eq!(sphere.vertex_count(), 2 + 3 * 8);
        assert_eq!(sphere.face_count(), 2 * 8 + 2 * 2 * 8);
    }

    #[test]
    fn sphere_volume_converges() {
        let sphere = uv_sphere(2.0, 48, 96);
        let exact = 4.0 / 3.0 * std::f64::consts::PI * 8.0;
        let vol = sphere.signed_volume();
        assert!(vol > 0.0, "sphere should not be inside-out");
        assert!((vol - exact).abs() / exact < 0.005);
    }

    #[test]
    fn sphere_surface_area_converges() {
        let sphere = uv_sphere(1.0, 48, 96);
        let exact = 4.0 * std::f64::consts::PI;
        assert!((sphere.surface_area() - exact).abs() / exact < 0.005);
    }

    #[test]
    fn sphere_clamps_degenerate_subdivisions() {
        let sphere = uv_sphere(1.0, 0, 0);
        assert!(!sphere.is_empty());
        assert!(sphere.signed_volume() > 0.0);
    }
}

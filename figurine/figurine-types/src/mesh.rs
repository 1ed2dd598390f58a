//! Indexed triangle mesh.

use crate::{Aabb, MeshBounds, MeshTopology, Triangle, Vertex};
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh.
///
/// This is the primary mesh type for FigurineForge. It stores vertices
/// and faces separately, with faces referencing vertices by index.
///
/// # Memory Layout
///
/// - `vertices`: `Vec<Vertex>` - Vertex positions and attributes
/// - `faces`: `Vec<[u32; 3]>` - Triangle faces as vertex indices
///
/// # Winding Order
///
/// Faces use **counter-clockwise (CCW) winding** when viewed from outside.
/// This means normals point outward by the right-hand rule.
///
/// # Example
///
/// ```
/// use figurine_types::{IndexedMesh, Vertex, MeshTopology};
///
/// let mut mesh = IndexedMesh::new();
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
/// mesh.faces.push([0, 1, 2]);
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexedMesh {
    /// Vertex data.
    pub vertices: Vec<Vertex>,

    /// Triangle faces as indices into the vertex array.
    /// Each face is `[v0, v1, v2]` with counter-clockwise winding.
    pub faces: Vec<[u32; 3]>,
}

impl IndexedMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    ///
    /// # Arguments
    ///
    /// * `vertex_count` - Expected number of vertices
    /// * `face_count` - Expected number of faces
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a mesh from vertices and faces.
    ///
    /// # Example
    ///
    /// ```
    /// use figurine_types::{IndexedMesh, Vertex, MeshTopology};
    ///
    /// let vertices = vec![
    ///     Vertex::from_coords(0.0, 0.0, 0.0),
    ///     Vertex::from_coords(1.0, 0.0, 0.0),
    ///     Vertex::from_coords(0.0, 1.0, 0.0),
    /// ];
    /// let faces = vec![[0, 1, 2]];
    ///
    /// let mesh = IndexedMesh::from_parts(vertices, faces);
    /// assert_eq!(mesh.face_count(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Vertex>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Create a mesh from raw coordinate and index data.
    ///
    /// This is the entry point for meshes arriving from the generation
    /// service, which delivers flat position and index buffers.
    ///
    /// # Arguments
    ///
    /// * `positions` - Flat array of vertex positions `[x0, y0, z0, x1, y1, z1, ...]`
    /// * `indices` - Flat array of face indices `[v0a, v1a, v2a, v0b, v1b, v2b, ...]`
    ///
    /// Returns an empty mesh if either array length is not divisible by 3.
    #[must_use]
    pub fn from_raw(positions: &[f64], indices: &[u32]) -> Self {
        if positions.len() % 3 != 0 || indices.len() % 3 != 0 {
            return Self::new();
        }

        let vertices = positions
            .chunks_exact(3)
            .map(|c| Vertex::from_coords(c[0], c[1], c[2]))
            .collect();

        let faces = indices
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();

        Self { vertices, faces }
    }

    /// Translate mesh by the given vector.
    pub fn translate(&mut self, offset: Vector3<f64>) {
        for vertex in &mut self.vertices {
            vertex.position += offset;
        }
    }

    /// Scale mesh uniformly around the origin.
    pub fn scale(&mut self, factor: f64) {
        for vertex in &mut self.vertices {
            vertex.position.coords *= factor;
        }
    }

    /// Compute the signed volume of the mesh.
    ///
    /// Uses the divergence theorem: the signed volume is the sum of signed
    /// tetrahedra volumes formed by each face and the origin.
    ///
    /// For a closed mesh with outward-facing normals (CCW winding when
    /// viewed from outside), this returns a positive value.
    ///
    /// # Returns
    ///
    /// - Positive value: normals point outward (correct orientation)
    /// - Negative value: normals point inward (inside-out mesh)
    /// - Near-zero: mesh is not closed or has inconsistent winding
    ///
    /// # Note
    ///
    /// This calculation assumes the mesh is closed (watertight). For open
    /// meshes, the result is not meaningful as a volume measurement.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        let mut volume = 0.0;

        for &[i0, i1, i2] in &self.faces {
            let v0 = &self.vertices[i0 as usize].position;
            let v1 = &self.vertices[i1 as usize].position;
            let v2 = &self.vertices[i2 as usize].position;

            // Signed volume of tetrahedron with origin = (v0 · (v1 × v2)) / 6
            let cross = Vector3::new(
                v1.y.mul_add(v2.z, -(v1.z * v2.y)),
                v1.z.mul_add(v2.x, -(v1.x * v2.z)),
                v1.x.mul_add(v2.y, -(v1.y * v2.x)),
            );
            volume += v0.z.mul_add(cross.z, v0.x.mul_add(cross.x, v0.y * cross.y));
        }

        volume / 6.0
    }

    /// Compute the absolute volume of the mesh.
    ///
    /// Returns the absolute value of `signed_volume()`.
    #[inline]
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.signed_volume().abs()
    }

    /// Check if the mesh appears to be inside-out.
    ///
    /// A mesh is considered inside-out if its signed volume is negative.
    #[inline]
    #[must_use]
    pub fn is_inside_out(&self) -> bool {
        self.signed_volume() < 0.0
    }

    /// Compute the total surface area of the mesh.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        self.triangles().map(|tri| tri.area()).sum()
    }

    /// Flip all face normals by reversing winding order.
    pub fn flip_normals(&mut self) {
        for face in &mut self.faces {
            face.swap(1, 2);
        }
        // Also flip vertex normals if present
        for vertex in &mut self.vertices {
            if let Some(ref mut normal) = vertex.attributes.normal {
                *normal = -*normal;
            }
        }
    }

    /// Clear all vertex attributes, keeping only positions and faces.
    ///
    /// Boolean compositing requires bare geometry; auxiliary channels
    /// (normals, colors, UVs) cannot survive re-triangulation anyway.
    pub fn strip_attributes(&mut self) {
        for vertex in &mut self.vertices {
            vertex.attributes = crate::VertexAttributes::empty();
        }
    }

    /// Reserve capacity for additional vertices and faces.
    pub fn reserve(&mut self, additional_vertices: usize, additional_faces: usize) {
        self.vertices.reserve(additional_vertices);
        self.faces.reserve(additional_faces);
    }

    /// Merge another mesh into this one.
    ///
    /// The other mesh's vertices and faces are appended, with face
    /// indices adjusted appropriately.
    ///
    /// # Note
    ///
    /// This function uses u32 vertex indices, which supports up to ~4 billion vertices.
    /// Meshes exceeding this limit are not supported.
    #[allow(clippy::cast_possible_truncation)]
    pub fn merge(&mut self, other: &Self) {
        let vertex_offset = self.vertices.len() as u32;

        self.vertices.extend(other.vertices.iter().cloned());

        for face in &other.faces {
            self.faces.push([
                face[0] + vertex_offset,
                face[1] + vertex_offset,
                face[2] + vertex_offset,
            ]);
        }
    }
}

impl MeshTopology for IndexedMesh {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    fn face(&self, index: usize) -> Option<[u32; 3]> {
        self.faces.get(index).copied()
    }

    fn triangle(&self, face_index: usize) -> Option<Triangle> {
        self.faces.get(face_index).map(|&[i0, i1, i2]| Triangle {
            v0: self.vertices[i0 as usize].position,
            v1: self.vertices[i1 as usize].position,
            v2: self.vertices[i2 as usize].position,
        })
    }

    fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    fn faces(&self) -> impl Iterator<Item = [u32; 3]> {
        self.faces.iter().copied()
    }

    fn triangles(&self) -> impl Iterator<Item = Triangle> {
        self.faces.iter().map(|&[i0, i1, i2]| Triangle {
            v0: self.vertices[i0 as usize].position,
            v1: self.vertices[i1 as usize].position,
            v2: self.vertices[i2 as usize].position,
        })
    }
}

impl MeshBounds for IndexedMesh {
    fn bounds(&self) -> Aabb {
        if self.vertices.is_empty() {
            return Aabb::empty();
        }

        let positions = self.vertices.iter().map(|v| &v.position);
        Aabb::from_points(positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::unit_cube;

    #[test]
    fn mesh_is_empty() {
        let mesh = IndexedMesh::new();
        assert!(mesh.is_empty());

        let mut mesh2 = IndexedMesh::new();
        mesh2.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
        assert!(mesh2.is_empty()); // no faces

        mesh2.faces.push([0, 0, 0]);
        assert!(!mesh2.is_empty());
    }

    #[test]
    fn mesh_from_raw() {
        let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        let indices = [0, 1, 2];

        let mesh = IndexedMesh::from_raw(&positions, &indices);
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.face_count(), 1);
    }

    #[test]
    fn mesh_from_raw_rejects_ragged_input() {
        let positions = [0.0, 0.0];
        let indices = [0, 1, 2];
        let mesh = IndexedMesh::from_raw(&positions, &indices);
        assert!(mesh.is_empty());
    }

    #[test]
    fn mesh_bounds() {
        let mut mesh = IndexedMesh::new();
        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(10.0, 5.0, 3.0));
        mesh.vertices.push(Vertex::from_coords(-2.0, 8.0, 1.0));

        let bounds = mesh.bounds();
        assert!((bounds.min.x - (-2.0)).abs() < f64::EPSILON);
        assert!((bounds.max.x - 10.0).abs() < f64::EPSILON);
        assert!((bounds.max.y - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_mesh_bounds() {
        let mesh = IndexedMesh::new();
        assert!(mesh.bounds().is_empty());
    }

    #[test]
    fn unit_cube_volume() {
        let cube = unit_cube();
        let vol = cube.signed_volume();
        assert!(
            (vol - 1.0).abs() < 1e-10,
            "Unit cube volume should be 1.0, got {vol}"
        );
    }

    #[test]
    fn unit_cube_surface_area() {
        let cube = unit_cube();
        let area = cube.surface_area();
        assert!(
            (area - 6.0).abs() < 1e-10,
            "Unit cube surface area should be 6.0, got {area}"
        );
    }

    #[test]
    fn flipped_cube_inside_out() {
        let mut cube = unit_cube();
        cube.flip_normals();
        assert!(cube.is_inside_out());
    }

    #[test]
    fn mesh_merge() {
        let mut mesh1 = IndexedMesh::new();
        mesh1.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
        mesh1.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
        mesh1.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
        mesh1.faces.push([0, 1, 2]);

        let mut mesh2 = IndexedMesh::new();
        mesh2.vertices.push(Vertex::from_coords(2.0, 0.0, 0.0));
        mesh2.vertices.push(Vertex::from_coords(3.0, 0.0, 0.0));
        mesh2.vertices.push(Vertex::from_coords(2.0, 1.0, 0.0));
        mesh2.faces.push([0, 1, 2]);

        mesh1.merge(&mesh2);
        assert_eq!(mesh1.vertex_count(), 6);
        assert_eq!(mesh1.face_count(), 2);
        // Second face should have offset indices
        assert_eq!(mesh1.faces[1], [3, 4, 5]);
    }

    #[test]
    fn mesh_translate() {
        let mut mesh = IndexedMesh::new();
        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));

        mesh.translate(Vector3::new(1.0, 2.0, 3.0));

        let pos = mesh.vertices[0].position;
        assert!((pos.x - 1.0).abs() < f64::EPSILON);
        assert!((pos.y - 2.0).abs() < f64::EPSILON);
        assert!((pos.z - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn mesh_scale() {
        let mut cube = unit_cube();
        cube.scale(2.0);
        let vol = cube.volume();
        assert!((vol - 8.0).abs() < 1e-10);
    }

    #[test]
    fn strip_attributes_clears_normals() {
        let mut mesh = IndexedMesh::new();
        mesh.vertices.push(Vertex::with_normal(
            nalgebra::Point3::origin(),
            Vector3::y(),
        ));
        mesh.strip_attributes();
        assert!(mesh.vertices[0].attributes.is_empty());
    }
}

//! Boolean operands: sanitized meshes with a pending rigid transform.

use figurine_types::{IndexedMesh, MeshTopology, Vector3};

/// Remove everything the boolean kernel cannot carry through.
///
/// Keeps positions, faces, and normals; drops color and UV channels
/// (re-triangulation cannot preserve them) along with degenerate faces,
/// which destabilize plane classification inside the kernel.
#[must_use]
pub fn sanitize(mesh: &IndexedMesh) -> IndexedMesh {
    let mut out = mesh.clone();
    for vertex in &mut out.vertices {
        vertex.attributes.color = None;
        vertex.attributes.uv = None;
    }
    let vertices = &out.vertices;
    out.faces.retain(|&[i0, i1, i2]| {
        if i0 == i1 || i1 == i2 || i2 == i0 {
            return false;
        }
        let v0 = vertices[i0 as usize].position;
        let v1 = vertices[i1 as usize].position;
        let v2 = vertices[i2 as usize].position;
        let area2 = (v1 - v0).cross(&(v2 - v0)).norm();
        area2 > 1e-12
    });
    out
}

/// A mesh paired with a translation, applied lazily.
///
/// Brushes are ephemeral: built per composition, consumed by [`bake`],
/// never stored across jobs.
///
/// [`bake`]: Brush::bake
#[derive(Debug, Clone)]
pub struct Brush {
    mesh: IndexedMesh,
    translation: Vector3<f64>,
}

impl Brush {
    /// Wrap a mesh with an identity transform.
    #[must_use]
    pub fn new(mesh: IndexedMesh) -> Self {
        Self {
            mesh,
            translation: Vector3::zeros(),
        }
    }

    /// Add a translation to the pending transform.
    #[must_use]
    pub fn translated(mut self, offset: Vector3<f64>) -> Self {
        self.translation += offset;
        self
    }

    /// True if the underlying mesh has no geometry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mesh.is_empty()
    }

    /// Apply the transform and sanitize, producing a kernel-ready mesh.
    #[must_use]
    pub fn bake(&self) -> IndexedMesh {
        let mut mesh = sanitize(&self.mesh);
        if self.translation != Vector3::zeros() {
            mesh.translate(self.translation);
        }
        mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figurine_types::{cuboid, MeshBounds, Vertex, VertexColor};

    #[test]
    fn sanitize_keeps_normals_drops_color_and_uv() {
        let mut mesh = cuboid(1.0, 1.0, 1.0);
        mesh.vertices[0].attributes.normal = Some(Vector3::y());
        mesh.vertices[0].attributes.color = Some(VertexColor::new(200, 10, 10));
        mesh.vertices[0].attributes.uv = Some((0.5, 0.5));

        let clean = sanitize(&mesh);
        assert!(clean.vertices[0].attributes.normal.is_some());
        assert!(clean.vertices[0].attributes.color.is_none());
        assert!(clean.vertices[0].attributes.uv.is_none());
    }

    #[test]
    fn sanitize_drops_degenerate_faces() {
        let mut mesh = cuboid(1.0, 1.0, 1.0);
        let n = mesh.faces.len();
        mesh.faces.push([0, 0, 1]); // repeated index
        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(2.0, 0.0, 0.0));
        let base = (mesh.vertices.len() - 3) as u32;
        mesh.faces.push([base, base + 1, base + 2]); // collinear

        let clean = sanitize(&mesh);
        assert_eq!(clean.faces.len(), n);
    }

    #[test]
    fn brush_bake_applies_translation() {
        let brush = Brush::new(cuboid(1.0, 1.0, 1.0))
            .translated(Vector3::new(1.0, 0.0, 0.0))
            .translated(Vector3::new(1.0, 2.0, 0.0));

        let baked = brush.bake();
        let center = baked.bounds().center();
        assert!((center.x - 2.0).abs() < 1e-12);
        assert!((center.y - 2.0).abs() < 1e-12);
        assert!(center.z.abs() < 1e-12);
    }
}

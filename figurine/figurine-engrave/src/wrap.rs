//! Conformal cylinder wrap.

use figurine_types::IndexedMesh;

use crate::error::{EngraveError, EngraveResult};

/// Bend a flat text block around a vertical cylinder of the given radius.
///
/// Treats each vertex's X as arc length along the cylinder surface and Z
/// as radial offset from it:
///
/// ```text
/// angle = x / r
/// x' = (r + z) * sin(angle)
/// z' = (r + z) * cos(angle)
/// y' = y
/// ```
///
/// A point at the origin lands on the cylinder wall at `z = r`, facing
/// +Z. Lengths along X are preserved on the surface itself; vertex
/// normals are dropped since the bend invalidates them.
///
/// # Errors
///
/// Returns [`EngraveError::InvalidRadius`] for a non-positive or
/// non-finite radius.
pub fn wrap_to_cylinder(mesh: &mut IndexedMesh, radius: f64) -> EngraveResult<()> {
    if radius <= 0.0 || !radius.is_finite() {
        return Err(EngraveError::InvalidRadius(radius));
    }

    for vertex in &mut mesh.vertices {
        let p = vertex.position;
        let angle = p.x / radius;
        let r = radius + p.z;
        vertex.position.x = r * angle.sin();
        vertex.position.z = r * angle.cos();
        vertex.attributes.normal = None;
    }

    Ok(())
}

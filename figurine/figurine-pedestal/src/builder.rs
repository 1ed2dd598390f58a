//! Lathe construction of the filleted-cylinder pedestal.

use figurine_types::{Aabb, IndexedMesh, Vertex, Vector3};
use nalgebra::Point3;
use tracing::debug;

use crate::error::PedestalResult;
use crate::params::PedestalSpec;

/// Build the pedestal profile in the (radial, vertical) half-plane.
///
/// Runs from the axis at the base, out to the rim, up the wall, and back
/// to the axis at the top. Each fillet is a quarter circle approximated
/// by `arc_steps` line segments.
fn profile_points(spec: &PedestalSpec) -> Vec<(f64, f64)> {
    let r = spec.radius;
    let h = spec.height;
    let b = spec.bevel_radius;
    let steps = spec.arc_steps.max(1);

    let mut points = Vec::with_capacity(2 * steps + 6);
    points.push((0.0, 0.0));

    if b > 0.0 {
        points.push((r - b, 0.0));
        // Bottom fillet: quarter circle centered at (r - b, b)
        for i in 1..=steps {
            #[allow(clippy::cast_precision_loss)]
            let t = std::f64::consts::FRAC_PI_2 * (i as f64) / (steps as f64);
            points.push((b.mul_add(t.sin(), r - b), b - b * t.cos()));
        }
        points.push((r, h - b));
        // Top fillet: quarter circle centered at (r - b, h - b)
        for i in 1..=steps {
            #[allow(clippy::cast_precision_loss)]
            let t = std::f64::consts::FRAC_PI_2 * (i as f64) / (steps as f64);
            points.push((b.mul_add(t.cos(), r - b), b.mul_add(t.sin(), h - b)));
        }
    } else {
        points.push((r, 0.0));
        points.push((r, h));
    }

    points.push((0.0, h));

    // Collapse consecutive duplicates left by zero-length arc segments.
    points.dedup_by(|a, b| (a.0 - b.0).abs() < 1e-12 && (a.1 - b.1).abs() < 1e-12);
    points
}

/// Build the pedestal mesh by revolving the filleted profile around +Y.
///
/// The result is a closed mesh with its base on `y = 0`, axis through the
/// origin, CCW winding viewed from outside, and pole fans at both ends of
/// the axis.
///
/// # Errors
///
/// Returns a [`crate::PedestalError`] for non-positive radius or height,
/// negative bevel, or fewer than 3 revolve segments.
///
/// # Example
///
/// ```
/// use figurine_pedestal::{build_pedestal, PedestalSpec, PedestalParams};
/// use figurine_types::{Aabb, Point3, MeshBounds};
///
/// let bounds = Aabb::new(Point3::new(-1.0, 0.0, -1.0), Point3::new(1.0, 4.0, 1.0));
/// let spec = PedestalSpec::from_bounds(&bounds, &PedestalParams::default()).unwrap();
/// let pedestal = build_pedestal(&spec).unwrap();
///
/// assert!(pedestal.signed_volume() > 0.0);
/// assert!(pedestal.bounds().min.y.abs() < 1e-9);
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn build_pedestal(spec: &PedestalSpec) -> PedestalResult<IndexedMesh> {
    spec.validate()?;

    let profile = profile_points(spec);
    // Interior profile points become revolve rings; the axis endpoints
    // become single pole vertices.
    let rings: Vec<(f64, f64)> = profile
        .iter()
        .copied()
        .filter(|&(radial, _)| radial > 1e-12)
        .collect();
    let n_rings = rings.len();
    let n_segs = spec.segments;

    let mut mesh = IndexedMesh::with_capacity(2 + n_rings * n_segs, 2 * n_rings * n_segs);

    // Bottom pole, rings bottom-to-top, top pole.
    mesh.vertices.push(Vertex::new(Point3::new(0.0, 0.0, 0.0)));
    for &(radial, y) in &rings {
        for j in 0..n_segs {
            let phi = std::f64::consts::TAU * (j as f64) / (n_segs as f64);
            mesh.vertices.push(Vertex::new(Point3::new(
                radial * phi.cos(),
                y,
                radial * phi.sin(),
            )));
        }
    }
    let top_pole = (1 + n_rings * n_segs) as u32;
    mesh.vertices
        .push(Vertex::new(Point3::new(0.0, spec.height, 0.0)));

    let ring_start = |i: usize| 1 + i * n_segs;

    // Base fan, normal -Y
    for j in 0..n_segs {
        let a = (ring_start(0) + j) as u32;
        let b = (ring_start(0) + (j + 1) % n_segs) as u32;
        mesh.faces.push([0, a, b]);
    }

    // Wall quads between consecutive rings
    for i in 0..n_rings - 1 {
        for j in 0..n_segs {
            let jn = (j + 1) % n_segs;
            let lower = (ring_start(i) + j) as u32;
            let lower_n = (ring_start(i) + jn) as u32;
            let upper = (ring_start(i + 1) + j) as u32;
            let upper_n = (ring_start(i + 1) + jn) as u32;

            mesh.faces.push([lower, upper, lower_n]);
            mesh.faces.push([lower_n, upper, upper_n]);
        }
    }

    // Top fan, normal +Y
    for j in 0..n_segs {
        let a = (ring_start(n_rings - 1) + j) as u32;
        let b = (ring_start(n_rings - 1) + (j + 1) % n_segs) as u32;
        mesh.faces.push([top_pole, b, a]);
    }

    debug!(
        rings = n_rings,
        segments = n_segs,
        radius = spec.radius,
        height = spec.height,
        "built pedestal"
    );

    Ok(mesh)
}

/// Translation placing a built pedestal under a grounded figurine.
///
/// The pedestal is centered on the figurine's footprint center, with its
/// top face at `bounds.min.y + overlap` so the two solids interpenetrate
/// slightly for the union.
#[must_use]
pub fn place_under(bounds: &Aabb, spec: &PedestalSpec) -> Vector3<f64> {
    let center = bounds.center();
    Vector3::new(
        center.x,
        bounds.min.y + spec.overlap - spec.height,
        center.z,
    )
}

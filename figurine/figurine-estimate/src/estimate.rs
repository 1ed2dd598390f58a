//! Shell/infill material model and pricing.

use figurine_types::IndexedMesh;
use tracing::debug;

use crate::error::{EstimateError, EstimateResult};
use crate::validate::validate_closed;

/// Tunable print settings and pricing.
///
/// Defaults mirror the production slicer profile: 0.4 mm nozzle, three
/// perimeters, 15% infill, PLA.
#[derive(Debug, Clone)]
pub struct EstimateConfig {
    /// Number of perimeter walls.
    pub perimeter_count: u32,
    /// Nozzle diameter in mm; one perimeter is one nozzle-width thick.
    pub nozzle_diameter: f64,
    /// Fraction of the interior filled with material.
    pub infill_ratio: f64,
    /// Material density in g/mm³.
    pub material_density: f64,
    /// Price per gram of material.
    pub rate_per_gram: f64,
    /// Fixed fee per order.
    pub service_fee: f64,
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            perimeter_count: 3,
            nozzle_diameter: 0.4,
            infill_ratio: 0.15,
            material_density: 0.001_24, // PLA, 1.24 g/cm³
            rate_per_gram: 0.03,
            service_fee: 12.00,
        }
    }
}

impl EstimateConfig {
    /// Total shell thickness in mm.
    #[must_use]
    pub fn shell_thickness(&self) -> f64 {
        f64::from(self.perimeter_count) * self.nozzle_diameter
    }
}

/// Material and price figures for one keepsake, full precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialEstimate {
    /// Enclosed volume in mm³.
    pub volume: f64,
    /// Surface area in mm².
    pub surface_area: f64,
    /// Volume of the solid shell in mm³, clamped to the enclosed volume.
    pub shell_volume: f64,
    /// Interior volume behind the shell in mm³.
    pub interior_volume: f64,
    /// Volume of material actually deposited in mm³.
    pub printed_volume: f64,
    /// Printed mass in grams.
    pub mass: f64,
    /// Price including the service fee.
    pub price: f64,
}

impl MaterialEstimate {
    /// Presentation-precision copy: mass to one decimal, price to two.
    ///
    /// All arithmetic happens at full precision; rounding exists only at
    /// this display boundary.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            mass: (self.mass * 10.0).round() / 10.0,
            price: (self.price * 100.0).round() / 100.0,
            ..*self
        }
    }
}

/// Estimate printed material and price for a closed solid.
///
/// The model prints a shell of `perimeter_count` nozzle-widths over the
/// whole surface and fills the remaining interior at `infill_ratio`. For
/// solids thinner than two shells the shell volume is clamped to the
/// enclosed volume and the interior drops to zero.
///
/// # Errors
///
/// - [`EstimateError::EmptyMesh`] / [`EstimateError::OpenMesh`] from the
///   closure check.
/// - [`EstimateError::InsideOut`] if the signed volume is negative.
pub fn estimate(
    mesh: &IndexedMesh,
    config: &EstimateConfig,
) -> EstimateResult<MaterialEstimate> {
    validate_closed(mesh)?;

    let volume = mesh.signed_volume();
    if volume < 0.0 {
        return Err(EstimateError::InsideOut { volume });
    }
    let surface_area = mesh.surface_area();

    let shell_volume = (surface_area * config.shell_thickness()).min(volume);
    let interior_volume = (volume - shell_volume).max(0.0);
    let printed_volume = config.infill_ratio.mul_add(interior_volume, shell_volume);
    let mass = printed_volume * config.material_density;
    let price = mass.mul_add(config.rate_per_gram, config.service_fee);

    debug!(volume, surface_area, printed_volume, mass, "estimated material");

    Ok(MaterialEstimate {
        volume,
        surface_area,
        shell_volume,
        interior_volume,
        printed_volume,
        mass,
        price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use figurine_types::cuboid;

    #[test]
    fn cube_estimate_exact() {
        let cube = cuboid(10.0, 10.0, 10.0);
        let est = estimate(&cube, &EstimateConfig::default()).expect("estimate");

        approx::assert_relative_eq!(est.volume, 1000.0, epsilon = 1e-9);
        approx::assert_relative_eq!(est.surface_area, 600.0, epsilon = 1e-9);
        // shell: 600 * 1.2 = 720, interior 280, printed 720 + 0.15 * 280 = 762
        approx::assert_relative_eq!(est.shell_volume, 720.0, epsilon = 1e-9);
        approx::assert_relative_eq!(est.printed_volume, 762.0, epsilon = 1e-9);
        approx::assert_relative_eq!(est.mass, 762.0 * 0.001_24, epsilon = 1e-9);
        approx::assert_relative_eq!(est.price, 12.0 + est.mass * 0.03, epsilon = 1e-12);
    }

    #[test]
    fn thin_solid_clamps_shell() {
        let sliver = cuboid(10.0, 0.5, 10.0);
        let est = estimate(&sliver, &EstimateConfig::default()).expect("estimate");

        // Surface-derived shell would exceed the enclosed volume
        assert!((est.shell_volume - est.volume).abs() < 1e-9);
        assert!(est.interior_volume.abs() < 1e-9);
        assert!((est.printed_volume - est.volume).abs() < 1e-9);
    }

    #[test]
    fn inside_out_rejected() {
        let mut cube = cuboid(10.0, 10.0, 10.0);
        cube.flip_normals();
        assert!(matches!(
            estimate(&cube, &EstimateConfig::default()),
            Err(EstimateError::InsideOut { .. })
        ));
    }

    #[test]
    fn open_mesh_rejected() {
        let mut cube = cuboid(10.0, 10.0, 10.0);
        cube.faces.pop();
        assert!(matches!(
            estimate(&cube, &EstimateConfig::default()),
            Err(EstimateError::OpenMesh { .. })
        ));
    }

    #[test]
    fn rounding_only_at_presentation() {
        let cube = cuboid(10.0, 10.0, 10.0);
        let est = estimate(&cube, &EstimateConfig::default()).expect("estimate");
        let shown = est.rounded();

        assert!((shown.mass - 0.9).abs() < 1e-12); // 0.94488 -> 0.9
        assert!((shown.price - 12.03).abs() < 1e-12);
        // Full-precision copy untouched
        assert!((est.mass - 0.944_88).abs() < 1e-9);
    }
}

//! Pedestal sizing: tunable parameters and the derived spec.

use figurine_types::Aabb;

use crate::error::{PedestalError, PedestalResult};

/// Tunable pedestal sizing parameters.
///
/// The defaults reproduce the product's shipped look: a comfortable margin
/// around small figurines (the floors dominate) that scales up smoothly for
/// large ones (the fractions take over).
#[derive(Debug, Clone)]
pub struct PedestalParams {
    /// Fraction of the footprint added as radial padding.
    pub padding_fraction: f64,
    /// Minimum radial padding in mm.
    pub padding_floor: f64,
    /// Fraction of the figurine's vertical extent used as pedestal height.
    pub height_fraction: f64,
    /// Minimum pedestal height in mm.
    pub height_floor: f64,
    /// Fraction of the vertical extent used as fillet radius.
    pub bevel_fraction: f64,
    /// Minimum fillet radius in mm.
    pub bevel_floor: f64,
    /// How far the pedestal top rises above the figurine's lowest point.
    /// A small interpenetration keeps the union robust against near-coplanar
    /// contact faces.
    pub overlap: f64,
    /// Angular steps of the revolve.
    pub segments: usize,
    /// Line segments approximating each quarter-circle fillet arc.
    pub arc_steps: usize,
}

impl Default for PedestalParams {
    fn default() -> Self {
        Self {
            padding_fraction: 0.12,
            padding_floor: 0.35,
            height_fraction: 0.10,
            height_floor: 0.40,
            bevel_fraction: 0.02,
            bevel_floor: 0.05,
            overlap: 0.05,
            segments: 64,
            arc_steps: 8,
        }
    }
}

impl PedestalParams {
    /// Set the revolve segment count.
    #[must_use]
    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    /// Set the minimum radial padding.
    #[must_use]
    pub fn with_padding_floor(mut self, padding_floor: f64) -> Self {
        self.padding_floor = padding_floor;
        self
    }

    /// Set the minimum pedestal height.
    #[must_use]
    pub fn with_height_floor(mut self, height_floor: f64) -> Self {
        self.height_floor = height_floor;
        self
    }

    /// Set the top-face overlap into the figurine.
    #[must_use]
    pub fn with_overlap(mut self, overlap: f64) -> Self {
        self.overlap = overlap;
        self
    }
}

/// Concrete pedestal dimensions derived from a figurine's bounds.
#[derive(Debug, Clone, Copy)]
pub struct PedestalSpec {
    /// Outer radius in mm.
    pub radius: f64,
    /// Height in mm.
    pub height: f64,
    /// Fillet radius in mm, already clamped to fit.
    pub bevel_radius: f64,
    /// Angular steps of the revolve.
    pub segments: usize,
    /// Line segments per quarter-circle fillet arc.
    pub arc_steps: usize,
    /// Top-face overlap into the figurine.
    pub overlap: f64,
}

impl PedestalSpec {
    /// Derive pedestal dimensions from the grounded figurine's bounds.
    ///
    /// The radius covers half the footprint plus padding; height and
    /// bevel follow the vertical extent with floor constants so tiny
    /// figurines still get a substantial base. The bevel is clamped so
    /// the two fillets fit within both the height and the radius.
    ///
    /// # Errors
    ///
    /// Returns [`PedestalError::EmptyBounds`] for empty bounds.
    pub fn from_bounds(bounds: &Aabb, params: &PedestalParams) -> PedestalResult<Self> {
        if bounds.is_empty() {
            return Err(PedestalError::EmptyBounds);
        }

        let footprint = bounds.footprint();
        let extent_y = bounds.height();

        let padding = (params.padding_fraction * footprint).max(params.padding_floor);
        let radius = footprint / 2.0 + padding;
        let height = (params.height_fraction * extent_y).max(params.height_floor);
        let bevel_radius = (params.bevel_fraction * extent_y)
            .max(params.bevel_floor)
            .min(height / 2.0)
            .min(radius);

        Ok(Self {
            radius,
            height,
            bevel_radius,
            segments: params.segments,
            arc_steps: params.arc_steps,
            overlap: params.overlap,
        })
    }

    /// Validate the spec before building geometry from it.
    pub(crate) fn validate(&self) -> PedestalResult<()> {
        if self.radius <= 0.0 || !self.radius.is_finite() {
            return Err(PedestalError::InvalidRadius(self.radius));
        }
        if self.height <= 0.0 || !self.height.is_finite() {
            return Err(PedestalError::InvalidHeight(self.height));
        }
        if self.bevel_radius < 0.0 || !self.bevel_radius.is_finite() {
            return Err(PedestalError::InvalidBevel(self.bevel_radius));
        }
        if self.segments < 3 {
            return Err(PedestalError::TooFewSegments {
                min: 3,
                actual: self.segments,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figurine_types::Point3;

    fn bounds(w: f64, h: f64, d: f64) -> Aabb {
        Aabb::new(
            Point3::new(-w / 2.0, 0.0, -d / 2.0),
            Point3::new(w / 2.0, h, d / 2.0),
        )
    }

    #[test]
    fn floors_dominate_for_small_figurines() {
        let spec =
            PedestalSpec::from_bounds(&bounds(2.0, 3.0, 1.5), &PedestalParams::default())
                .expect("spec");
        // 0.12 * 2.0 = 0.24 < 0.35 floor
        assert!((spec.radius - (1.0 + 0.35)).abs() < 1e-12);
        // 0.10 * 3.0 = 0.30 < 0.40 floor
        assert!((spec.height - 0.40).abs() < 1e-12);
        // 0.02 * 3.0 = 0.06 > 0.05 floor, fits within height / 2 = 0.20
        assert!((spec.bevel_radius - 0.06).abs() < 1e-12);
    }

    #[test]
    fn fractions_take_over_for_large_figurines() {
        let spec =
            PedestalSpec::from_bounds(&bounds(50.0, 80.0, 40.0), &PedestalParams::default())
                .expect("spec");
        assert!((spec.radius - (25.0 + 0.12 * 50.0)).abs() < 1e-12);
        assert!((spec.height - 8.0).abs() < 1e-12);
        assert!((spec.bevel_radius - 1.6).abs() < 1e-12);
    }

    #[test]
    fn bevel_clamped_to_half_height() {
        let params = PedestalParams {
            bevel_floor: 10.0,
            ..PedestalParams::default()
        };
        let spec = PedestalSpec::from_bounds(&bounds(2.0, 3.0, 2.0), &params).expect("spec");
        assert!((spec.bevel_radius - spec.height / 2.0).abs() < 1e-12);
    }

    #[test]
    fn empty_bounds_rejected() {
        let result = PedestalSpec::from_bounds(&Aabb::empty(), &PedestalParams::default());
        assert!(matches!(result, Err(PedestalError::EmptyBounds)));
    }

    #[test]
    fn builder_methods() {
        let params = PedestalParams::default()
            .with_segments(32)
            .with_overlap(0.1);
        assert_eq!(params.segments, 32);
        assert!((params.overlap - 0.1).abs() < f64::EPSILON);
    }
}

//! Axis-aligned bounding box.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box (AABB).
///
/// Derived data: recomputed from a mesh whenever the mesh changes, never
/// authoritative on its own. Satisfies `min <= max` componentwise for any
/// non-empty box.
///
/// # Example
///
/// ```
/// use figurine_types::{Aabb, Point3};
///
/// let aabb = Aabb::new(
///     Point3::new(-1.0, 0.0, -1.0),
///     Point3::new(1.0, 4.0, 1.0),
/// );
///
/// assert!((aabb.footprint() - 2.0).abs() < 1e-12);
/// assert!(aabb.contains(&Point3::new(0.0, 2.0, 0.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Minimum corner (smallest x, y, z values).
    pub min: Point3<f64>,
    /// Maximum corner (largest x, y, z values).
    pub max: Point3<f64>,
}

impl Aabb {
    /// Create a new AABB from minimum and maximum corners.
    ///
    /// The corners are automatically corrected if min > max for any axis.
    #[must_use]
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self {
            min: Point3::new(min.x.min(max.x), min.y.min(max.y), min.z.min(max.z)),
            max: Point3::new(min.x.max(max.x), min.y.max(max.y), min.z.max(max.z)),
        }
    }

    /// Create an empty (invalid) AABB.
    ///
    /// An empty AABB has min > max, which is useful as a starting point
    /// for expanding to include points.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point3::new is not const in nalgebra
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Create an AABB from an iterator of points.
    ///
    /// Returns an empty AABB if the iterator is empty.
    #[must_use]
    pub fn from_points<'a>(points: impl Iterator<Item = &'a Point3<f64>>) -> Self {
        let mut aabb = Self::empty();
        for point in points {
            aabb.expand_to_include(point);
        }
        aabb
    }

    /// Check if the AABB is empty (has no valid volume).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Get the size (dimensions) of the AABB.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Get the center of the AABB.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point3<f64> {
        Point3::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
            (self.min.z + self.max.z) * 0.5,
        )
    }

    /// The ground-plane footprint: the larger of the X and Z extents.
    ///
    /// The pedestal radius is derived from this.
    #[inline]
    #[must_use]
    pub fn footprint(&self) -> f64 {
        let s = self.size();
        s.x.max(s.z)
    }

    /// The vertical (Y) extent.
    #[inline]
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Check if the AABB contains a point.
    ///
    /// Points on the boundary are considered inside.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: &Point3<f64>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Expand the AABB to include a point.
    ///
    /// Modifies the AABB in place.
    pub fn expand_to_include(&mut self, point: &Point3<f64>) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aabb_from_points() {
        let points = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, 5.0, 3.0),
            Point3::new(-2.0, 8.0, 1.0),
        ];

        let aabb = Aabb::from_points(points.iter());
        assert!((aabb.min.x - (-2.0)).abs() < f64::EPSILON);
        assert!((aabb.min.y - 0.0).abs() < f64::EPSILON);
        assert!((aabb.max.x - 10.0).abs() < f64::EPSILON);
        assert!((aabb.max.y - 8.0).abs() < f64::EPSILON);
        assert!((aabb.max.z - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn aabb_empty() {
        let aabb = Aabb::empty();
        assert!(aabb.is_empty());
    }

    #[test]
    fn aabb_footprint_takes_larger_axis() {
        let aabb = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 4.0, 3.0));
        assert!((aabb.footprint() - 3.0).abs() < f64::EPSILON);
        assert!((aabb.height() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn aabb_contains() {
        let aabb = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 10.0, 10.0));

        assert!(aabb.contains(&Point3::new(5.0, 5.0, 5.0)));
        assert!(aabb.contains(&Point3::new(0.0, 0.0, 0.0)));
        assert!(!aabb.contains(&Point3::new(-1.0, 5.0, 5.0)));
    }

    #[test]
    fn aabb_corrects_swapped_corners() {
        let aabb = Aabb::new(Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 1.0));
        assert!(aabb.min.x < aabb.max.x);
    }
}

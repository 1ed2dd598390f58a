//! Glyph outline flattening and ring grouping.
//!
//! `rusttype` hands us glyph outlines as move/line/quad/cubic commands in
//! font space (y down). This module flattens them into closed polygonal
//! contours in the engraver's y-up frame and sorts the contours into outer
//! rings with their contained holes, ready for cap triangulation.

use rusttype::OutlineBuilder;

/// A closed 2D contour, implicitly joined last-to-first.
pub(crate) type Contour = Vec<[f64; 2]>;

/// Line segments used to flatten each bezier span.
const CURVE_STEPS: usize = 6;

/// Contours with area below this are dropped as numerical noise.
const MIN_CONTOUR_AREA: f64 = 1e-9;

/// Collects flattened glyph contours.
pub(crate) struct OutlineFlattener {
    pub(crate) contours: Vec<Contour>,
    current: Contour,
    start: [f64; 2],
    cursor: [f64; 2],
}

impl OutlineFlattener {
    pub(crate) const fn new() -> Self {
        Self {
            contours: Vec::new(),
            current: Vec::new(),
            start: [0.0, 0.0],
            cursor: [0.0, 0.0],
        }
    }

    /// Convert a font-space point to the engraver frame (y up).
    fn point(x: f32, y: f32) -> [f64; 2] {
        [f64::from(x), -f64::from(y)]
    }

    fn push(&mut self, p: [f64; 2]) {
        self.current.push(p);
        self.cursor = p;
    }

    fn finish_contour(&mut self) {
        if self.current.len() >= 3 {
            self.contours.push(std::mem::take(&mut self.current));
        } else {
            self.current.clear();
        }
    }
}

impl OutlineBuilder for OutlineFlattener {
    fn move_to(&mut self, x: f32, y: f32) {
        self.finish_contour();
        let p = Self::point(x, y);
        self.start = p;
        self.cursor = p;
        self.current.push(p);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.push(Self::point(x, y));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let p0 = self.cursor;
        let p1 = Self::point(x1, y1);
        let p2 = Self::point(x, y);
        for i in 1..=CURVE_STEPS {
            #[allow(clippy::cast_precision_loss)]
            let t = (i as f64) / (CURVE_STEPS as f64);
            let u = 1.0 - t;
            let px = u * u * p0[0] + 2.0 * u * t * p1[0] + t * t * p2[0];
            let py = u * u * p0[1] + 2.0 * u * t * p1[1] + t * t * p2[1];
            self.push([px, py]);
        }
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let p0 = self.cursor;
        let p1 = Self::point(x1, y1);
        let p2 = Self::point(x2, y2);
        let p3 = Self::point(x, y);
        for i in 1..=CURVE_STEPS {
            #[allow(clippy::cast_precision_loss)]
            let t = (i as f64) / (CURVE_STEPS as f64);
            let u = 1.0 - t;
            let px = u * u * u * p0[0]
                + 3.0 * u * u * t * p1[0]
                + 3.0 * u * t * t * p2[0]
                + t * t * t * p3[0];
            let py = u * u * u * p0[1]
                + 3.0 * u * u * t * p1[1]
                + 3.0 * u * t * t * p2[1]
                + t * t * t * p3[1];
            self.push([px, py]);
        }
    }

    fn close(&mut self) {
        // Drop an explicit closing point coincident with the start.
        if let Some(last) = self.current.last() {
            if (last[0] - self.start[0]).abs() < 1e-12 && (last[1] - self.start[1]).abs() < 1e-12 {
                self.current.pop();
            }
        }
        self.finish_contour();
    }
}

/// An outer ring and the holes it contains.
pub(crate) struct RingGroup {
    /// Outer boundary, wound CCW.
    pub(crate) outer: Contour,
    /// Holes, wound CW.
    pub(crate) holes: Vec<Contour>,
}

/// Shoelace signed area; positive for CCW winding.
pub(crate) fn signed_area(contour: &Contour) -> f64 {
    let n = contour.len();
    let mut area = 0.0;
    for i in 0..n {
        let [x0, y0] = contour[i];
        let [x1, y1] = contour[(i + 1) % n];
        area += x0.mul_add(y1, -(x1 * y0));
    }
    area * 0.5
}

/// Even-odd ray cast.
fn contains_point(contour: &Contour, p: [f64; 2]) -> bool {
    let n = contour.len();
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let [xi, yi] = contour[i];
        let [xj, yj] = contour[j];
        if ((yi > p[1]) != (yj > p[1]))
            && p[0] < (xj - xi) * (p[1] - yi) / (yj - yi) + xi
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Sort contours into outer rings and their holes.
///
/// A contour nested inside an even number of other contours is an outer
/// ring; odd nesting makes it a hole, assigned to the smallest outer ring
/// that contains it. Output winding is normalized: outers CCW, holes CW,
/// which is what both the cap triangulation and the wall extrusion assume.
pub(crate) fn group_rings(contours: Vec<Contour>) -> Vec<RingGroup> {
    let contours: Vec<Contour> = contours
        .into_iter()
        .filter(|c| c.len() >= 3 && signed_area(c).abs() > MIN_CONTOUR_AREA)
        .collect();

    let mut depth = vec![0usize; contours.len()];
    for (i, contour) in contours.iter().enumerate() {
        let probe = contour[0];
        for (j, other) in contours.iter().enumerate() {
            if i != j && contains_point(other, probe) {
                depth[i] += 1;
            }
        }
    }

    let mut groups: Vec<RingGroup> = Vec::new();
    let mut outer_index: Vec<usize> = Vec::new();
    for (i, contour) in contours.iter().enumerate() {
        if depth[i] % 2 == 0 {
            let mut outer = contour.clone();
            if signed_area(&outer) < 0.0 {
                outer.reverse();
            }
            groups.push(RingGroup {
                outer,
                holes: Vec::new(),
            });
            outer_index.push(i);
        }
    }

    for (i, contour) in contours.iter().enumerate() {
        if depth[i] % 2 == 1 {
            let probe = contour[0];
            // Smallest containing outer is the immediate parent.
            let parent = groups
                .iter_mut()
                .zip(outer_index.iter())
                .filter(|(_, &oi)| contains_point(&contours[oi], probe))
                .min_by(|(a, _), (b, _)| {
                    signed_area(&a.outer)
                        .abs()
                        .total_cmp(&signed_area(&b.outer).abs())
                });
            if let Some((group, _)) = parent {
                let mut hole = contour.clone();
                if signed_area(&hole) > 0.0 {
                    hole.reverse();
                }
                group.holes.push(hole);
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(cx: f64, cy: f64, half: f64, ccw: bool) -> Contour {
        let mut c = vec![
            [cx - half, cy - half],
            [cx + half, cy - half],
            [cx + half, cy + half],
            [cx - half, cy + half],
        ];
        if !ccw {
            c.reverse();
        }
        c
    }

    #[test]
    fn signed_area_sign_follows_winding() {
        assert!(signed_area(&square(0.0, 0.0, 1.0, true)) > 0.0);
        assert!(signed_area(&square(0.0, 0.0, 1.0, false)) < 0.0);
    }

    #[test]
    fn groups_nested_square_as_hole() {
        let contours = vec![
            square(0.0, 0.0, 2.0, true),
            square(0.0, 0.0, 1.0, true), // will be re-wound CW
        ];
        let groups = group_rings(contours);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].holes.len(), 1);
        assert!(signed_area(&groups[0].outer) > 0.0);
        assert!(signed_area(&groups[0].holes[0]) < 0.0);
    }

    #[test]
    fn island_inside_hole_is_its_own_outer() {
        // Like the counter of a lowercase "o" holding a dot
        let contours = vec![
            square(0.0, 0.0, 4.0, true),
            square(0.0, 0.0, 2.0, false),
            square(0.0, 0.0, 0.5, true),
        ];
        let groups = group_rings(contours);
        assert_eq!(groups.len(), 2);
        let total_holes: usize = groups.iter().map(|g| g.holes.len()).sum();
        assert_eq!(total_holes, 1);
    }

    #[test]
    fn disjoint_squares_are_separate_outers() {
        let contours = vec![square(-3.0, 0.0, 1.0, true), square(3.0, 0.0, 1.0, false)];
        let groups = group_rings(contours);
        assert_eq!(groups.len(), 2);
        assert!(groups.iter().all(|g| g.holes.is_empty()));
        assert!(groups.iter().all(|g| signed_area(&g.outer) > 0.0));
    }

    #[test]
    fn degenerate_contours_dropped() {
        let contours = vec![
            vec![[0.0, 0.0], [1.0, 0.0]],                 // too few points
            vec![[0.0, 0.0], [1.0, 0.0], [2.0, 0.0]],     // zero area
            square(0.0, 0.0, 1.0, true),
        ];
        let groups = group_rings(contours);
        assert_eq!(groups.len(), 1);
    }
}

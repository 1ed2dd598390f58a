//! Per-line engraving geometry for a pedestal wall.

use figurine_types::{IndexedMesh, Vector3};
use tracing::debug;

use crate::block::typeset_line;
use crate::error::EngraveResult;
use crate::spec::EngravingSpec;
use crate::typeface::Typeface;
use crate::wrap::wrap_to_cylinder;

/// Extrusion thickness of the text block, in mm.
pub const TEXT_DEPTH: f64 = 0.06;

/// How far the block is recessed below the pedestal surface before
/// wrapping. Leaves `TEXT_DEPTH - TEXT_RECESS` proud of the wall so the
/// subtraction always crosses the surface.
pub const TEXT_RECESS: f64 = 0.04;

/// One engraved line, wrapped and positioned in pedestal-local
/// coordinates (pedestal base on `y = 0`).
#[derive(Debug)]
pub struct EngravedLine {
    /// Closed engraving solid, ready to subtract from the pedestal.
    pub mesh: IndexedMesh,
    /// Vertical offset from pedestal mid-height that was applied.
    pub y_offset: f64,
}

/// Typeset, wrap, and position both engraving lines.
///
/// Line 1 is set larger and sits above mid-height; line 2 at 75% of that
/// size below. Sizes follow the pedestal so text never outgrows its wall:
/// `size1 = min(0.35 * height, 0.20 * radius)`.
///
/// Returns one entry per non-empty line; an empty spec yields an empty
/// vector.
///
/// # Errors
///
/// Propagates typesetting failures ([`crate::EngraveError`]); the caller
/// decides whether to degrade to an unengraved pedestal.
pub fn engrave_lines(
    spec: &EngravingSpec,
    typeface: &Typeface,
    radius: f64,
    pedestal_height: f64,
) -> EngraveResult<Vec<EngravedLine>> {
    let size1 = (0.35 * pedestal_height).min(0.20 * radius);
    let slots = [
        (spec.line1.as_deref(), size1, 0.22 * pedestal_height),
        (spec.line2.as_deref(), 0.75 * size1, -0.22 * pedestal_height),
    ];

    let mut lines = Vec::new();
    for (text, size, y_offset) in slots {
        let Some(text) = text else { continue };

        let mut mesh = typeset_line(typeface, text, size, TEXT_DEPTH, TEXT_RECESS)?;
        wrap_to_cylinder(&mut mesh, radius)?;
        mesh.translate(Vector3::new(0.0, pedestal_height / 2.0 + y_offset, 0.0));

        debug!(text, size, y_offset, "engraved line");
        lines.push(EngravedLine { mesh, y_offset });
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    #[test]
    fn size_follows_height_for_squat_pedestals() {
        let size1 = (0.35_f64 * 0.4).min(0.20 * 1.5);
        assert!((size1 - 0.14).abs() < 1e-12);
    }

    #[test]
    fn size_capped_by_radius_for_tall_pedestals() {
        let size1 = (0.35_f64 * 10.0).min(0.20 * 1.0);
        assert!((size1 - 0.2).abs() < 1e-12);
    }
}

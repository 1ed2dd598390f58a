//! The synchronous stage chain: normalize, pedestal, engrave, compose,
//! estimate.

use figurine_compose::{compose, Brush, ComposeStats, Evaluator};
use figurine_engrave::{engrave_lines, EngravingSpec, Typeface};
use figurine_estimate::{estimate, MaterialEstimate};
use figurine_normalize::normalize;
use figurine_pedestal::{build_pedestal, place_under, PedestalSpec};
use figurine_types::{IndexedMesh, Vector3};
use tracing::{info, warn};

use crate::config::PipelineConfig;
use crate::error::PipelineResult;

/// A finished keepsake: the printable solid and its order figures.
#[derive(Debug)]
pub struct Keepsake {
    /// Watertight figurine-plus-pedestal solid.
    pub solid: IndexedMesh,
    /// Material and price estimate, full precision.
    pub estimate: MaterialEstimate,
    /// What the compositor carved and what it skipped.
    pub stats: ComposeStats,
}

/// Run the full pipeline on one figurine.
///
/// Grounds the figurine, derives and builds the pedestal underneath it,
/// typesets the engraving onto the pedestal wall, fuses everything into
/// one solid and estimates material and price.
///
/// Engraving is best-effort: with no typeface, or when typesetting
/// fails, the pedestal ships plain and the run still succeeds. Failed
/// per-line subtractions are handled the same way inside the compositor
/// and show up in [`Keepsake::stats`].
///
/// # Errors
///
/// [`crate::PipelineError`] wrapping the failing stage: an unusable
/// figurine mesh, impossible pedestal dimensions, a failed final union,
/// or a composed solid that is not closed.
pub fn run_pipeline(
    figurine: &IndexedMesh,
    engraving: &EngravingSpec,
    typeface: Option<&Typeface>,
    config: &PipelineConfig,
) -> PipelineResult<Keepsake> {
    let grounded = normalize(figurine)?;
    let spec = PedestalSpec::from_bounds(&grounded.bounds, &config.pedestal)?;
    let pedestal_mesh = build_pedestal(&spec)?;
    let offset = place_under(&grounded.bounds, &spec);

    let engravings = engraving_brushes(engraving, typeface, &spec, offset);

    let figurine_brush = Brush::new(grounded.mesh);
    let pedestal_brush = Brush::new(pedestal_mesh).translated(offset);

    let composed = compose(&figurine_brush, &pedestal_brush, &engravings, &Evaluator::new())?;
    let material = estimate(&composed.mesh, &config.estimate)?;

    info!(
        volume = material.volume,
        mass = material.mass,
        carved = composed.stats.lines_carved,
        "keepsake ready"
    );

    Ok(Keepsake {
        solid: composed.mesh,
        estimate: material,
        stats: composed.stats,
    })
}

/// Typeset the engraving into subtraction brushes in world coordinates.
///
/// Returns an empty vector when there is nothing to engrave or when
/// typesetting cannot proceed; the pedestal is left plain either way.
fn engraving_brushes(
    engraving: &EngravingSpec,
    typeface: Option<&Typeface>,
    spec: &PedestalSpec,
    offset: Vector3<f64>,
) -> Vec<Brush> {
    if engraving.is_empty() {
        return Vec::new();
    }
    let Some(typeface) = typeface else {
        warn!("engraving requested but no typeface configured, pedestal left plain");
        return Vec::new();
    };

    match engrave_lines(engraving, typeface, spec.radius, spec.height) {
        Ok(lines) => lines
            .into_iter()
            .map(|line| Brush::new(line.mesh).translated(offset))
            .collect(),
        Err(err) => {
            warn!(error = %err, "engraving failed, pedestal left plain");
            Vec::new()
        }
    }
}

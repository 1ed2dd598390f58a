//! Subtract-then-union sequencing with per-line fallback.

use figurine_types::IndexedMesh;
use tracing::{info, warn};

use crate::brush::Brush;
use crate::error::{ComposeError, ComposeResult};
use crate::evaluator::Evaluator;

/// Counters describing what the composition actually did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComposeStats {
    /// Engraving subtractions attempted.
    pub lines_attempted: usize,
    /// Engraving subtractions that landed in the result.
    pub lines_carved: usize,
    /// Subtractions that failed and were skipped.
    pub lines_skipped: usize,
}

/// The final watertight keepsake solid.
#[derive(Debug)]
pub struct ComposedSolid {
    /// Fused figurine + engraved pedestal.
    pub mesh: IndexedMesh,
    /// What was carved and what fell back.
    pub stats: ComposeStats,
}

/// Fuse figurine, pedestal, and engraving brushes into one solid.
///
/// Each engraving is subtracted from the pedestal first; a failed
/// subtraction is logged and skipped, keeping the last good pedestal
/// (a missing line is cosmetic, an unsellable order is not). The final
/// figurine/pedestal union has no such fallback: its failure means there
/// is no printable solid, so it surfaces as
/// [`ComposeError::UnionFailed`].
///
/// # Errors
///
/// [`ComposeError::EmptyMesh`] if the figurine or pedestal brush is
/// empty; [`ComposeError::UnionFailed`] if the final union fails.
pub fn compose(
    figurine: &Brush,
    pedestal: &Brush,
    engravings: &[Brush],
    evaluator: &Evaluator,
) -> ComposeResult<ComposedSolid> {
    if figurine.is_empty() || pedestal.is_empty() {
        return Err(ComposeError::EmptyMesh);
    }

    let mut stats = ComposeStats::default();
    let mut pedestal_mesh = pedestal.bake();

    for engraving in engravings {
        stats.lines_attempted += 1;
        match evaluator.subtract(&pedestal_mesh, &engraving.bake()) {
            Ok(carved) => {
                pedestal_mesh = carved;
                stats.lines_carved += 1;
            }
            Err(err) => {
                stats.lines_skipped += 1;
                warn!(error = %err, "engraving subtraction failed, keeping uncarved pedestal");
            }
        }
    }

    let figurine_mesh = figurine.bake();
    let mesh = evaluator
        .union(&figurine_mesh, &pedestal_mesh)
        .map_err(|err| ComposeError::UnionFailed {
            reason: err.to_string(),
        })?;

    info!(
        carved = stats.lines_carved,
        skipped = stats.lines_skipped,
        "composed keepsake solid"
    );

    Ok(ComposedSolid { mesh, stats })
}

//! Error types for the pipeline.

use figurine_compose::ComposeError;
use figurine_estimate::EstimateError;
use figurine_normalize::NormalizeError;
use figurine_pedestal::PedestalError;
use thiserror::Error;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Errors that abort a pipeline run.
///
/// Engraving failures never appear here: a keepsake without its text is
/// still sellable, so they are logged and the pedestal ships plain. The
/// stages below produce nothing usable when they fail.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The figurine mesh could not be grounded.
    #[error("normalization failed: {0}")]
    Normalize(#[from] NormalizeError),

    /// Pedestal sizing or construction failed.
    #[error("pedestal construction failed: {0}")]
    Pedestal(#[from] PedestalError),

    /// Boolean compositing produced no printable solid.
    #[error("compositing failed: {0}")]
    Compose(#[from] ComposeError),

    /// The composed solid failed validation or estimation.
    #[error("estimation failed: {0}")]
    Estimate(#[from] EstimateError),
}

//! Error types for pedestal construction.

use thiserror::Error;

/// Result type for pedestal operations.
pub type PedestalResult<T> = Result<T, PedestalError>;

/// Errors that can occur while deriving or building a pedestal.
#[derive(Debug, Error)]
pub enum PedestalError {
    /// Radius is zero, negative, or non-finite.
    #[error("invalid pedestal radius: {0}")]
    InvalidRadius(f64),

    /// Height is zero, negative, or non-finite.
    #[error("invalid pedestal height: {0}")]
    InvalidHeight(f64),

    /// Bevel radius is negative or non-finite.
    #[error("invalid bevel radius: {0}")]
    InvalidBevel(f64),

    /// Revolve segment count is too low.
    #[error("segments must be at least {min}, got {actual}")]
    TooFewSegments {
        /// Minimum required segments.
        min: usize,
        /// Actual segment count.
        actual: usize,
    },

    /// Figurine bounds are empty, so no footprint exists to size against.
    #[error("cannot derive a pedestal from empty bounds")]
    EmptyBounds,
}

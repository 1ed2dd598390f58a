//! Error types for text engraving.

use thiserror::Error;

/// Result type for engraving operations.
pub type EngraveResult<T> = Result<T, EngraveError>;

/// Errors that can occur while typesetting engraving text.
#[derive(Debug, Error)]
pub enum EngraveError {
    /// A line exceeds the engraving character limit.
    #[error("engraving line is {actual} characters, limit is {max}")]
    LineTooLong {
        /// Maximum allowed characters.
        max: usize,
        /// Actual character count.
        actual: usize,
    },

    /// Font data could not be loaded or parsed.
    #[error("typeface unavailable: {0}")]
    FontUnavailable(String),

    /// The text produced no engraveable outlines (e.g. only characters
    /// the font has no glyphs for).
    #[error("text produced no glyph geometry")]
    NoGlyphGeometry,

    /// Cap triangulation failed.
    #[error("glyph cap triangulation failed: {0}")]
    Triangulation(String),

    /// Wrap radius is zero, negative, or non-finite.
    #[error("invalid wrap radius: {0}")]
    InvalidRadius(f64),
}

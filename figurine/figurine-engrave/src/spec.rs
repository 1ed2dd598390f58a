//! The user-facing engraving request.

use crate::error::{EngraveError, EngraveResult};

/// Maximum characters per engraving line.
///
/// Longer lines would shrink below legible stroke widths at pedestal
/// scale; the product UI enforces the same limit.
pub const MAX_LINE_CHARS: usize = 20;

/// Up to two lines of text to engrave into the pedestal wall.
///
/// Construction normalizes the input: surrounding whitespace is trimmed
/// and whitespace-only lines become `None`.
///
/// # Example
///
/// ```
/// use figurine_engrave::EngravingSpec;
///
/// let spec = EngravingSpec::new("  For Mom  ", "").unwrap();
/// assert_eq!(spec.line1.as_deref(), Some("For Mom"));
/// assert!(spec.line2.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngravingSpec {
    /// Upper line, larger type.
    pub line1: Option<String>,
    /// Lower line, smaller type.
    pub line2: Option<String>,
}

impl EngravingSpec {
    /// Build a spec from raw user input.
    ///
    /// # Errors
    ///
    /// Returns [`EngraveError::LineTooLong`] if a trimmed line exceeds
    /// [`MAX_LINE_CHARS`] characters.
    pub fn new(line1: &str, line2: &str) -> EngraveResult<Self> {
        Ok(Self {
            line1: Self::normalize(line1)?,
            line2: Self::normalize(line2)?,
        })
    }

    /// A spec with no text at all.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            line1: None,
            line2: None,
        }
    }

    /// True if neither line carries text.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.line1.is_none() && self.line2.is_none()
    }

    fn normalize(line: &str) -> EngraveResult<Option<String>> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        let chars = trimmed.chars().count();
        if chars > MAX_LINE_CHARS {
            return Err(EngraveError::LineTooLong {
                max: MAX_LINE_CHARS,
                actual: chars,
            });
        }
        Ok(Some(trimmed.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_drops_blank_lines() {
        let spec = EngravingSpec::new("  Happy 30th  ", "   ").expect("spec");
        assert_eq!(spec.line1.as_deref(), Some("Happy 30th"));
        assert!(spec.line2.is_none());
        assert!(!spec.is_empty());
    }

    #[test]
    fn empty_spec() {
        let spec = EngravingSpec::new("", "").expect("spec");
        assert!(spec.is_empty());
        assert_eq!(spec, EngravingSpec::empty());
    }

    #[test]
    fn rejects_over_long_line() {
        let long = "x".repeat(MAX_LINE_CHARS + 1);
        let result = EngravingSpec::new(&long, "");
        assert!(matches!(
            result,
            Err(EngraveError::LineTooLong { max: MAX_LINE_CHARS, actual }) if actual == MAX_LINE_CHARS + 1
        ));
    }

    #[test]
    fn limit_counts_chars_not_bytes() {
        let line = "ü".repeat(MAX_LINE_CHARS);
        assert!(EngravingSpec::new(&line, "").is_ok());
    }
}

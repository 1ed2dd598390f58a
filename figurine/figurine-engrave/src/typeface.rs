//! TrueType font loading.

use std::path::Path;

use rusttype::Font;

use crate::error::{EngraveError, EngraveResult};

/// A parsed TrueType/OpenType typeface.
///
/// Owns its font data so engraving jobs can run on a worker thread
/// without borrowing from the caller.
pub struct Typeface {
    pub(crate) font: Font<'static>,
}

impl std::fmt::Debug for Typeface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Typeface")
            .field("glyphs", &self.font.glyph_count())
            .finish()
    }
}

impl Typeface {
    /// Parse a typeface from raw font file bytes.
    ///
    /// # Errors
    ///
    /// Returns [`EngraveError::FontUnavailable`] if the data is not a
    /// parseable font.
    pub fn from_bytes(data: Vec<u8>) -> EngraveResult<Self> {
        let font = Font::try_from_vec(data)
            .ok_or_else(|| EngraveError::FontUnavailable("unparseable font data".to_owned()))?;
        Ok(Self { font })
    }

    /// Load a typeface from a font file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`EngraveError::FontUnavailable`] if the file cannot be
    /// read or parsed.
    pub fn load(path: impl AsRef<Path>) -> EngraveResult<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)
            .map_err(|e| EngraveError::FontUnavailable(format!("{}: {e}", path.display())))?;
        Self::from_bytes(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_rejected() {
        let result = Typeface::from_bytes(vec![0u8; 64]);
        assert!(matches!(result, Err(EngraveError::FontUnavailable(_))));
    }

    #[test]
    fn missing_file_rejected() {
        let result = Typeface::load("/nonexistent/font.ttf");
        assert!(matches!(result, Err(EngraveError::FontUnavailable(_))));
    }
}

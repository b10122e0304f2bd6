//! Font metrics for text measurement
//!
//! Centering and overflow detection both need text widths. By default the
//! crate estimates widths from a fixed character ratio; callers who need
//! print-accurate centering can supply real metrics through this trait.

use crate::constants::DEFAULT_CHAR_WIDTH_RATIO;

/// Trait for measuring text dimensions.
///
/// Implementations must be cheap to call repeatedly; a render measures
/// every line it centers.
pub trait FontMetrics {
    /// Width of a single character in points at the given font size
    fn char_width(&self, ch: char, font_size: f32) -> f32;

    /// Total width of a string in points at the given font size
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        text.chars().map(|ch| self.char_width(ch, font_size)).sum()
    }
}

/// Estimate text width from the fixed character ratio, used whenever no
/// metrics are supplied
pub fn estimate_text_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * DEFAULT_CHAR_WIDTH_RATIO
}

/// Width of `text`, measured with `metrics` when present
pub fn text_width(text: &str, font_size: f32, metrics: Option<&dyn FontMetrics>) -> f32 {
    match metrics {
        Some(m) => m.text_width(text, font_size),
        None => estimate_text_width(text, font_size),
    }
}

/// TrueType metrics backed by ttf-parser.
///
/// Owns the raw font data and re-parses it per measurement; parsing is a
/// zero-copy header read, so this stays cheap. This type only measures;
/// embedding the font into the PDF remains the caller's concern.
#[cfg(feature = "ttf-parser")]
pub struct TtfFontMetrics {
    font_data: Vec<u8>,
    units_per_em: f32,
}

#[cfg(feature = "ttf-parser")]
impl TtfFontMetrics {
    /// Create metrics from raw TTF/TTC font data, validating it up front.
    pub fn new(font_data: Vec<u8>) -> crate::Result<Self> {
        let face = ttf_parser::Face::parse(&font_data, 0)
            .map_err(|e| crate::error::ReportError::FontError(format!("Failed to parse font: {e}")))?;
        let units_per_em = face.units_per_em() as f32;
        Ok(Self {
            font_data,
            units_per_em,
        })
    }
}

#[cfg(feature = "ttf-parser")]
impl FontMetrics for TtfFontMetrics {
    fn char_width(&self, ch: char, font_size: f32) -> f32 {
        // Data was validated in new(); a parse failure here falls back to
        // the heuristic rather than panicking mid-render.
        ttf_parser::Face::parse(&self.font_data, 0)
            .ok()
            .and_then(|face| {
                let gid = face.glyph_index(ch)?;
                let advance = face.glyph_hor_advance(gid)?;
                Some(advance as f32 / self.units_per_em * font_size)
            })
            .unwrap_or(font_size * DEFAULT_CHAR_WIDTH_RATIO)
    }
}

#[cfg(feature = "ttf-parser")]
impl std::fmt::Debug for TtfFontMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtfFontMetrics")
            .field("units_per_em", &self.units_per_em)
            .field("font_data_len", &self.font_data.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_scales_with_length() {
        let short = estimate_text_width("ab", 10.0);
        let long = estimate_text_width("abcd", 10.0);
        assert!((long - short * 2.0).abs() < 0.001);
    }

    #[test]
    fn test_estimate_counts_chars_not_bytes() {
        // Two chars, four bytes
        assert_eq!(
            estimate_text_width("\u{00e9}\u{00e9}", 10.0),
            estimate_text_width("ab", 10.0)
        );
    }

    #[cfg(feature = "ttf-parser")]
    #[test]
    fn test_ttf_metrics_invalid_data() {
        assert!(TtfFontMetrics::new(vec![0, 1, 2, 3]).is_err());
    }
}

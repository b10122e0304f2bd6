//! Letterhead renderer: the invariant top band of every report
//!
//! Left to right: the wide primary logo, then the small badge logo in the
//! right column, with the two-line institutional title centered underneath
//! across the full width. Everything is a pure function of the static
//! configuration and the page geometry.

use crate::config::Letterhead;
use crate::constants::{FONT_BOLD, LETTERHEAD_TITLE_SIZE};
use crate::drawing::{self, ImageRegistry};
use crate::font::FontMetrics;
use crate::geometry::PageGeometry;
use lopdf::content::Operation;
use tracing::trace;

/// Height reserved at the bottom of the letterhead band for the two
/// institutional title lines
const TITLE_BAND_HEIGHT: f32 = 32.0;

/// Width of the right-hand column holding the badge logo
const BADGE_COLUMN_WIDTH: f32 = 120.0;

/// Generate the letterhead operations, registering logo XObjects in
/// `images`
pub fn operations(
    letterhead: &Letterhead,
    geometry: &PageGeometry,
    metrics: Option<&dyn FontMetrics>,
    images: &mut ImageRegistry,
) -> Vec<Operation> {
    let mut ops = Vec::new();

    let band_top = geometry.letterhead_top();
    let band_bottom = geometry.title_block_top();
    let logo_band_bottom = band_bottom + TITLE_BAND_HEIGHT;
    let logo_band_height = band_top - logo_band_bottom;

    // Primary logo at the left margin, vertically centered in the logo band
    let primary = &letterhead.primary_logo;
    let primary_y = logo_band_bottom + (logo_band_height - primary.height) / 2.0;
    images.place(&mut ops, primary, geometry.margin, primary_y);

    // Badge logo centered in the right column
    let badge = &letterhead.badge_logo;
    let badge_center = geometry.margin + geometry.content_width() - BADGE_COLUMN_WIDTH / 2.0;
    let badge_y = logo_band_bottom + (logo_band_height - badge.height) / 2.0;
    images.place(&mut ops, badge, badge_center - badge.width / 2.0, badge_y);

    // Two-line institutional title, centered across the full width
    let line_1_baseline = band_bottom + TITLE_BAND_HEIGHT - 13.0;
    let line_2_baseline = band_bottom + 5.0;
    drawing::show_text_centered(
        &mut ops,
        &letterhead.title_line1,
        geometry.center_x(),
        line_1_baseline,
        FONT_BOLD,
        LETTERHEAD_TITLE_SIZE,
        metrics,
    );
    drawing::show_text_centered(
        &mut ops,
        &letterhead.title_line2,
        geometry.center_x(),
        line_2_baseline,
        FONT_BOLD,
        LETTERHEAD_TITLE_SIZE,
        metrics,
    );

    trace!("Letterhead generated {} operations", ops.len());
    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ImageAsset;
    use crate::drawing::encode_operations;

    fn sample_letterhead(primary: ImageAsset, badge: ImageAsset) -> Letterhead {
        Letterhead::new(
            primary,
            badge,
            "MINISTERE DE L'AGRICULTURE",
            "Service National des Semences",
        )
    }

    #[test]
    fn test_letterhead_is_deterministic() {
        let letterhead = sample_letterhead(
            ImageAsset::placeholder(150.0, 48.0),
            ImageAsset::placeholder(48.0, 48.0),
        );
        let geometry = PageGeometry::a4();

        let mut reg_a = ImageRegistry::new();
        let mut reg_b = ImageRegistry::new();
        let a = operations(&letterhead, &geometry, None, &mut reg_a);
        let b = operations(&letterhead, &geometry, None, &mut reg_b);
        assert_eq!(
            encode_operations(a).unwrap(),
            encode_operations(b).unwrap()
        );
    }

    #[test]
    fn test_missing_logo_keeps_title_positions() {
        let geometry = PageGeometry::a4();
        let with_missing = sample_letterhead(
            ImageAsset::placeholder(150.0, 48.0),
            ImageAsset::placeholder(48.0, 48.0),
        );

        let mut registry = ImageRegistry::new();
        let ops = operations(&with_missing, &geometry, None, &mut registry);
        // No image ops, but both title lines still render at their slots
        assert!(registry.is_empty());
        let text_shows = ops.iter().filter(|op| op.operator == "Tj").count();
        assert_eq!(text_shows, 2);
    }

    #[test]
    fn test_title_lines_sit_inside_letterhead_band() {
        let geometry = PageGeometry::a4();
        let letterhead = sample_letterhead(
            ImageAsset::placeholder(150.0, 48.0),
            ImageAsset::placeholder(48.0, 48.0),
        );
        let mut registry = ImageRegistry::new();
        let ops = operations(&letterhead, &geometry, None, &mut registry);

        for op in ops.iter().filter(|op| op.operator == "Td") {
            if let lopdf::Object::Real(y) = op.operands[1] {
                assert!(y > geometry.title_block_top());
                assert!(y < geometry.letterhead_top());
            }
        }
    }
}

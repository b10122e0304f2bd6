//! Footer renderer: the invariant bottom band
//!
//! The decorative bar sits above the two-line address, both centered, and
//! the whole band is pinned to the page's bottom margin. Positions are
//! derived from the page geometry alone, so body content length can never
//! move the footer. Overflowing content is the composer's problem, not
//! this renderer's.

use crate::config::FooterInfo;
use crate::constants::{FONT_REGULAR, FOOTER_FONT_SIZE};
use crate::drawing::{self, ImageRegistry};
use crate::font::FontMetrics;
use crate::geometry::PageGeometry;
use lopdf::content::Operation;

/// Baseline drop of the first address line below the bar
const ADDRESS_LINE_1_DROP: f32 = 14.0;

/// Baseline drop of the second address line below the bar
const ADDRESS_LINE_2_DROP: f32 = 24.0;

/// Generate the footer operations, registering the bar XObject in
/// `images`
pub fn operations(
    footer: &FooterInfo,
    geometry: &PageGeometry,
    metrics: Option<&dyn FontMetrics>,
    images: &mut ImageRegistry,
) -> Vec<Operation> {
    let mut ops = Vec::new();

    // Bar at the top of the footer band, spanning the content width
    let bar = &footer.bar;
    let bar_bottom = geometry.footer_top() - bar.height;
    images.place(&mut ops, bar, geometry.margin, bar_bottom);

    drawing::show_text_centered(
        &mut ops,
        &footer.address_line1,
        geometry.center_x(),
        bar_bottom - ADDRESS_LINE_1_DROP,
        FONT_REGULAR,
        FOOTER_FONT_SIZE,
        metrics,
    );
    drawing::show_text_centered(
        &mut ops,
        &footer.address_line2,
        geometry.center_x(),
        bar_bottom - ADDRESS_LINE_2_DROP,
        FONT_REGULAR,
        FOOTER_FONT_SIZE,
        metrics,
    );

    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ImageAsset;
    use crate::drawing::encode_operations;

    fn sample_footer() -> FooterInfo {
        FooterInfo::new(
            ImageAsset::placeholder(515.0, 10.0),
            "B.P. 1234, Avenue de la Nation",
            "Tel: +000 00 00 00 00",
        )
    }

    #[test]
    fn test_footer_is_deterministic() {
        let geometry = PageGeometry::a4();
        let footer = sample_footer();
        let mut reg_a = ImageRegistry::new();
        let mut reg_b = ImageRegistry::new();
        let a = operations(&footer, &geometry, None, &mut reg_a);
        let b = operations(&footer, &geometry, None, &mut reg_b);
        assert_eq!(
            encode_operations(a).unwrap(),
            encode_operations(b).unwrap()
        );
    }

    #[test]
    fn test_footer_stays_inside_bottom_band() {
        let geometry = PageGeometry::a4();
        let footer = sample_footer();
        let mut registry = ImageRegistry::new();
        let ops = operations(&footer, &geometry, None, &mut registry);

        for op in ops.iter().filter(|op| op.operator == "Td") {
            if let lopdf::Object::Real(y) = op.operands[1] {
                assert!(y < geometry.footer_top());
                assert!(y > 0.0);
            }
        }
    }

    #[test]
    fn test_footer_position_fixed_under_geometry_changes_elsewhere() {
        // Growing the letterhead must not move the footer
        let footer = sample_footer();
        let a4 = PageGeometry::a4();
        let tall_letterhead = PageGeometry {
            letterhead_height: 140.0,
            ..PageGeometry::a4()
        };

        let mut reg_a = ImageRegistry::new();
        let mut reg_b = ImageRegistry::new();
        let a = operations(&footer, &a4, None, &mut reg_a);
        let b = operations(&footer, &tall_letterhead, None, &mut reg_b);
        assert_eq!(
            encode_operations(a).unwrap(),
            encode_operations(b).unwrap()
        );
    }
}

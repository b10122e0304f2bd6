//! Title block renderer: the report's variable identity
//!
//! A single header cell showing the report type fully uppercased, with the
//! report number verbatim on its own line at a smaller size. The cell's
//! border belongs to the body frame so adjacent edges collapse into one
//! line.

use crate::constants::{FONT_BOLD, FONT_REGULAR, REPORT_NUMBER_SIZE, TITLE_SIZE};
use crate::drawing;
use crate::font::FontMetrics;
use crate::geometry::PageGeometry;
use crate::report::ReportIdentity;
use lopdf::content::Operation;

/// Baseline drop of the title line from the top of the header cell
const TITLE_BASELINE_DROP: f32 = 16.0;

/// Baseline drop of the report-number line from the top of the header cell
const NUMBER_BASELINE_DROP: f32 = 31.0;

/// Generate the title-block text operations
pub fn operations(
    identity: &ReportIdentity,
    geometry: &PageGeometry,
    metrics: Option<&dyn FontMetrics>,
) -> Vec<Operation> {
    let mut ops = Vec::new();
    let cell_top = geometry.title_block_top();

    drawing::show_text_centered(
        &mut ops,
        &identity.display_title(),
        geometry.center_x(),
        cell_top - TITLE_BASELINE_DROP,
        FONT_BOLD,
        TITLE_SIZE,
        metrics,
    );
    drawing::show_text_centered(
        &mut ops,
        &identity.report_number,
        geometry.center_x(),
        cell_top - NUMBER_BASELINE_DROP,
        FONT_REGULAR,
        REPORT_NUMBER_SIZE,
        metrics,
    );

    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawing::encode_operations;
    use lopdf::Object;

    #[test]
    fn test_title_casing_is_idempotent() {
        let geometry = PageGeometry::a4();
        let lower = ReportIdentity::new("bulletin d'analyse", "No. 2024-00123");
        let upper = ReportIdentity::new("BULLETIN D'ANALYSE", "No. 2024-00123");

        let a = operations(&lower, &geometry, None);
        let b = operations(&upper, &geometry, None);
        assert_eq!(
            encode_operations(a).unwrap(),
            encode_operations(b).unwrap()
        );
    }

    #[test]
    fn test_report_number_renders_verbatim() {
        let geometry = PageGeometry::a4();
        let identity = ReportIdentity::new("Bulletin", "no. 2024-00123/b");
        let ops = operations(&identity, &geometry, None);

        let shown: Vec<_> = ops
            .iter()
            .filter(|op| op.operator == "Tj")
            .map(|op| match &op.operands[0] {
                Object::String(bytes, _) => String::from_utf8_lossy(bytes).into_owned(),
                other => panic!("unexpected Tj operand {other:?}"),
            })
            .collect();
        assert_eq!(shown, vec!["BULLETIN", "no. 2024-00123/b"]);
    }

    #[test]
    fn test_number_is_smaller_than_title() {
        let geometry = PageGeometry::a4();
        let identity = ReportIdentity::new("Bulletin", "No. 1");
        let ops = operations(&identity, &geometry, None);

        let sizes: Vec<f32> = ops
            .iter()
            .filter(|op| op.operator == "Tf")
            .map(|op| match op.operands[1] {
                Object::Real(size) => size,
                _ => panic!("font size operand should be numeric"),
            })
            .collect();
        assert_eq!(sizes.len(), 2);
        assert!(sizes[1] < sizes[0]);
    }
}

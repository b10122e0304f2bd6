//! Body frame renderer
//!
//! Frames caller-supplied content in the single bordered region below the
//! title block. The frame itself is content-agnostic: one outer rectangle
//! spanning the header cell and the body cell, plus one shared separator
//! line, so adjacent cell borders collapse into a single stroke. The frame
//! always spans the full fixed body region; content height never changes
//! it.

use crate::constants::*;
use crate::drawing;
use crate::font::FontMetrics;
use crate::geometry::PageGeometry;
use crate::report::ReportContent;
use crate::text;
use lopdf::content::Operation;

/// Fraction of the grid width given to the label column of a key-value
/// grid
const KEY_COLUMN_RATIO: f32 = 0.4;

/// Generate the report frame: outer border around the title block and
/// body, with the single collapsed line between them
pub fn frame_operations(geometry: &PageGeometry) -> Vec<Operation> {
    let mut ops = Vec::new();
    let x = geometry.margin;
    let width = geometry.content_width();
    let top = geometry.title_block_top();
    let bottom = geometry.body_bottom();

    drawing::set_stroke_width(&mut ops, DEFAULT_BORDER_WIDTH);
    drawing::stroke_rect(&mut ops, x, bottom, width, top - bottom);
    // Shared edge between the header cell and the body cell
    drawing::horizontal_line(&mut ops, x, x + width, geometry.body_top());
    ops
}

/// Generate operations for the content inside the body cell.
///
/// Only the tagged shape is inspected; each variant renders into the same
/// padded region.
pub fn content_operations(
    content: &ReportContent,
    geometry: &PageGeometry,
    metrics: Option<&dyn FontMetrics>,
) -> Vec<Operation> {
    let inner_x = geometry.margin + BODY_PADDING;
    let inner_width = geometry.content_width() - BODY_PADDING * 2.0;
    let inner_top = geometry.body_top() - BODY_PADDING;

    match content {
        ReportContent::Paragraph(body) => {
            paragraph_operations(body, inner_x, inner_width, inner_top, metrics)
        }
        ReportContent::Table { header, rows } => {
            table_operations(header, rows, inner_x, inner_width, inner_top, metrics)
        }
        ReportContent::KeyValueGrid(entries) => {
            grid_operations(entries, inner_x, inner_width, inner_top)
        }
    }
}

fn paragraph_operations(
    body: &str,
    x: f32,
    width: f32,
    top: f32,
    metrics: Option<&dyn FontMetrics>,
) -> Vec<Operation> {
    let mut ops = Vec::new();
    let line_height = text::line_height(BODY_FONT_SIZE);
    let mut baseline = top - BODY_FONT_SIZE;

    for line in text::wrap_text(body, width, BODY_FONT_SIZE, metrics) {
        if !line.is_empty() {
            drawing::show_text(&mut ops, &line, x, baseline, FONT_REGULAR, BODY_FONT_SIZE);
        }
        baseline -= line_height;
    }
    ops
}

fn table_operations(
    header: &[String],
    rows: &[Vec<String>],
    x: f32,
    width: f32,
    top: f32,
    metrics: Option<&dyn FontMetrics>,
) -> Vec<Operation> {
    let mut ops = Vec::new();
    let row_height = ReportContent::grid_row_height();
    let row_count = rows.len() + 1;
    let total_height = row_count as f32 * row_height;
    let column_width = width / header.len() as f32;

    drawing::set_stroke_width(&mut ops, DEFAULT_BORDER_WIDTH);
    drawing::stroke_rect(&mut ops, x, top - total_height, width, total_height);
    for i in 1..row_count {
        let y = top - i as f32 * row_height;
        drawing::horizontal_line(&mut ops, x, x + width, y);
    }
    for i in 1..header.len() {
        let col_x = x + i as f32 * column_width;
        drawing::vertical_line(&mut ops, col_x, top, top - total_height);
    }

    // Header row: bold, centered in each column
    let header_baseline = top - CELL_PADDING - BODY_FONT_SIZE;
    for (i, label) in header.iter().enumerate() {
        let center = x + (i as f32 + 0.5) * column_width;
        drawing::show_text_centered(
            &mut ops,
            label,
            center,
            header_baseline,
            FONT_BOLD,
            BODY_FONT_SIZE,
            metrics,
        );
    }

    // Data rows: left-aligned with cell padding
    for (row_idx, row) in rows.iter().enumerate() {
        let baseline = top - (row_idx + 1) as f32 * row_height - CELL_PADDING - BODY_FONT_SIZE;
        for (col_idx, value) in row.iter().enumerate() {
            let cell_x = x + col_idx as f32 * column_width + CELL_PADDING;
            drawing::show_text(&mut ops, value, cell_x, baseline, FONT_REGULAR, BODY_FONT_SIZE);
        }
    }

    ops
}

fn grid_operations(entries: &[(String, String)], x: f32, width: f32, top: f32) -> Vec<Operation> {
    let mut ops = Vec::new();
    let row_height = ReportContent::grid_row_height();
    let total_height = entries.len() as f32 * row_height;
    let key_width = width * KEY_COLUMN_RATIO;

    drawing::set_stroke_width(&mut ops, DEFAULT_BORDER_WIDTH);
    drawing::stroke_rect(&mut ops, x, top - total_height, width, total_height);
    for i in 1..entries.len() {
        let y = top - i as f32 * row_height;
        drawing::horizontal_line(&mut ops, x, x + width, y);
    }
    drawing::vertical_line(&mut ops, x + key_width, top, top - total_height);

    for (i, (key, value)) in entries.iter().enumerate() {
        let baseline = top - i as f32 * row_height - CELL_PADDING - BODY_FONT_SIZE;
        drawing::show_text(
            &mut ops,
            key,
            x + CELL_PADDING,
            baseline,
            FONT_BOLD,
            BODY_FONT_SIZE,
        );
        drawing::show_text(
            &mut ops,
            value,
            x + key_width + CELL_PADDING,
            baseline,
            FONT_REGULAR,
            BODY_FONT_SIZE,
        );
    }

    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawing::encode_operations;

    #[test]
    fn test_frame_ignores_content_entirely() {
        // Frame is a function of geometry only; there is nothing
        // content-shaped to pass in
        let geometry = PageGeometry::a4();
        let a = frame_operations(&geometry);
        let b = frame_operations(&geometry);
        assert_eq!(
            encode_operations(a).unwrap(),
            encode_operations(b).unwrap()
        );
    }

    #[test]
    fn test_frame_has_single_shared_separator() {
        let geometry = PageGeometry::a4();
        let ops = frame_operations(&geometry);
        // One outer rectangle, one separator line: exactly one "re" and
        // one "m"/"l" pair
        assert_eq!(ops.iter().filter(|op| op.operator == "re").count(), 1);
        assert_eq!(ops.iter().filter(|op| op.operator == "m").count(), 1);
    }

    #[test]
    fn test_paragraph_lines_descend_from_body_top() {
        let geometry = PageGeometry::a4();
        let content = ReportContent::paragraph("First\nSecond");
        let ops = content_operations(&content, &geometry, None);
        let baselines: Vec<f32> = ops
            .iter()
            .filter(|op| op.operator == "Td")
            .map(|op| match op.operands[1] {
                lopdf::Object::Real(y) => y,
                _ => panic!("Td y operand should be numeric"),
            })
            .collect();
        assert_eq!(baselines.len(), 2);
        assert!(baselines[0] < geometry.body_top());
        assert!(baselines[1] < baselines[0]);
    }

    #[test]
    fn test_table_draws_every_cell() {
        let geometry = PageGeometry::a4();
        let content = ReportContent::table(
            vec!["Espece".into(), "Lot".into(), "Resultat".into()],
            vec![
                vec!["Mais".into(), "L-01".into(), "Conforme".into()],
                vec!["Riz".into(), "L-02".into(), "Conforme".into()],
            ],
        );
        let ops = content_operations(&content, &geometry, None);
        // 3 header cells + 6 data cells
        assert_eq!(ops.iter().filter(|op| op.operator == "Tj").count(), 9);
    }

    #[test]
    fn test_grid_splits_key_and_value_columns() {
        let geometry = PageGeometry::a4();
        let content = ReportContent::key_value_grid(vec![
            ("Espece".to_string(), "Zea mays".to_string()),
            ("Lot".to_string(), "L-2024-01".to_string()),
        ]);
        let ops = content_operations(&content, &geometry, None);
        assert_eq!(ops.iter().filter(|op| op.operator == "Tj").count(), 4);
        // Exactly one column divider
        let verticals = ops
            .iter()
            .filter(|op| op.operator == "m")
            .count();
        // 1 row separator + 1 column divider
        assert_eq!(verticals, 2);
    }
}

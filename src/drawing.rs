//! PDF content-stream primitives shared by the report renderers
//!
//! Official reports are monochrome, so the primitives here stroke and fill
//! in black and only parameterize geometry.

use crate::Result;
use crate::config::ImageAsset;
use crate::font::{self, FontMetrics};
use lopdf::{
    Document, Object, ObjectId, Stream,
    content::{Content, Operation},
    xobject,
};
use tracing::{debug, trace, warn};

/// Set the stroke width for subsequent path operations
pub fn set_stroke_width(ops: &mut Vec<Operation>, width: f32) {
    ops.push(Operation::new("w", vec![width.into()]));
}

/// Stroke a rectangle; (x, y) is the bottom-left corner
pub fn stroke_rect(ops: &mut Vec<Operation>, x: f32, y: f32, width: f32, height: f32) {
    ops.push(Operation::new(
        "re",
        vec![x.into(), y.into(), width.into(), height.into()],
    ));
    ops.push(Operation::new("S", vec![]));
}

/// Stroke a horizontal line at `y` from `x1` to `x2`
pub fn horizontal_line(ops: &mut Vec<Operation>, x1: f32, x2: f32, y: f32) {
    ops.push(Operation::new("m", vec![x1.into(), y.into()]));
    ops.push(Operation::new("l", vec![x2.into(), y.into()]));
    ops.push(Operation::new("S", vec![]));
}

/// Stroke a vertical line at `x` from `y1` to `y2`
pub fn vertical_line(ops: &mut Vec<Operation>, x: f32, y1: f32, y2: f32) {
    ops.push(Operation::new("m", vec![x.into(), y1.into()]));
    ops.push(Operation::new("l", vec![x.into(), y2.into()]));
    ops.push(Operation::new("S", vec![]));
}

/// Show a single line of text with its baseline origin at (x, y)
pub fn show_text(ops: &mut Vec<Operation>, text: &str, x: f32, y: f32, font: &str, size: f32) {
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new(
        "Tf",
        vec![Object::Name(font.as_bytes().to_vec()), size.into()],
    ));
    ops.push(Operation::new("Td", vec![x.into(), y.into()]));
    ops.push(Operation::new(
        "Tj",
        vec![Object::string_literal(text.to_string())],
    ));
    ops.push(Operation::new("ET", vec![]));
}

/// Show a single line of text horizontally centered on `center_x`
pub fn show_text_centered(
    ops: &mut Vec<Operation>,
    text: &str,
    center_x: f32,
    y: f32,
    font: &str,
    size: f32,
    metrics: Option<&dyn FontMetrics>,
) {
    let width = font::text_width(text, size, metrics);
    show_text(ops, text, center_x - width / 2.0, y, font, size);
}

/// An image XObject placed by a renderer, to be registered in the page
/// resources under `name`
pub struct PlacedImage {
    pub name: String,
    pub stream: Stream,
}

impl std::fmt::Debug for PlacedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacedImage").field("name", &self.name).finish()
    }
}

/// Collects the image XObjects referenced by a page's operations.
///
/// Names are assigned in placement order, so identical inputs always
/// produce identical operation streams.
#[derive(Debug, Default)]
pub struct ImageRegistry {
    images: Vec<PlacedImage>,
}

impl ImageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `asset` with its bottom-left corner at (x, y), using the
    /// asset's fixed footprint.
    ///
    /// A placeholder asset, or one whose bytes fail to decode, emits no
    /// operations at all: the footprint stays reserved by the surrounding
    /// layout, which never moves. Decode failures are logged and absorbed.
    pub fn place(&mut self, ops: &mut Vec<Operation>, asset: &ImageAsset, x: f32, y: f32) {
        let Some(data) = asset.data() else {
            trace!("Placeholder asset at ({x}, {y}); reserving footprint only");
            return;
        };

        match xobject::image_from(data.to_vec()) {
            Ok(stream) => {
                let name = format!("Im{}", self.images.len());
                ops.push(Operation::new("q", vec![]));
                ops.push(Operation::new(
                    "cm",
                    vec![
                        asset.width.into(),
                        Object::Real(0.0),
                        Object::Real(0.0),
                        asset.height.into(),
                        x.into(),
                        y.into(),
                    ],
                ));
                ops.push(Operation::new(
                    "Do",
                    vec![Object::Name(name.as_bytes().to_vec())],
                ));
                ops.push(Operation::new("Q", vec![]));
                self.images.push(PlacedImage { name, stream });
            }
            Err(e) => {
                warn!("Failed to decode image asset: {e}; leaving placeholder footprint");
            }
        }
    }

    pub fn into_images(self) -> Vec<PlacedImage> {
        self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Encode operations and append them to a page's content streams
pub fn add_operations_to_page(
    doc: &mut Document,
    page_id: ObjectId,
    operations: Vec<Operation>,
) -> Result<()> {
    debug!("Adding {} operations to page {:?}", operations.len(), page_id);
    let content = Content { operations };
    let content_bytes = content.encode()?;
    doc.add_page_contents(page_id, content_bytes)?;
    Ok(())
}

/// Encode operations without touching a document. Used by tests to compare
/// renderer output byte-for-byte.
pub fn encode_operations(operations: Vec<Operation>) -> Result<Vec<u8>> {
    Ok(Content { operations }.encode()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_emits_no_operations() {
        let mut registry = ImageRegistry::new();
        let mut ops = Vec::new();
        registry.place(&mut ops, &ImageAsset::placeholder(100.0, 20.0), 40.0, 700.0);
        assert!(ops.is_empty());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_undecodable_bytes_emit_no_operations() {
        let mut registry = ImageRegistry::new();
        let mut ops = Vec::new();
        let asset = ImageAsset::from_bytes(vec![0xde, 0xad, 0xbe, 0xef], 100.0, 20.0);
        registry.place(&mut ops, &asset, 40.0, 700.0);
        assert!(ops.is_empty());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_centered_text_offsets_by_half_width() {
        let mut ops = Vec::new();
        show_text_centered(&mut ops, "AB", 100.0, 50.0, "F1", 10.0, None);
        // Heuristic width of "AB" at 10pt is 10pt, so x = 95
        let td = ops.iter().find(|op| op.operator == "Td").unwrap();
        assert_eq!(td.operands[0], Object::Real(95.0));
    }

    #[test]
    fn test_encode_is_deterministic() {
        let build = || {
            let mut ops = Vec::new();
            stroke_rect(&mut ops, 10.0, 10.0, 50.0, 20.0);
            show_text(&mut ops, "x", 12.0, 14.0, "F1", 8.0);
            ops
        };
        assert_eq!(
            encode_operations(build()).unwrap(),
            encode_operations(build()).unwrap()
        );
    }
}

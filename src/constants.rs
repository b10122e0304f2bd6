//! Constants for page dimensions and typographic defaults

/// Standard A4 page width in points
pub const A4_WIDTH: f32 = 595.0;

/// Standard A4 page height in points
pub const A4_HEIGHT: f32 = 842.0;

/// Default page margin in points
pub const DEFAULT_MARGIN: f32 = 40.0;

/// Default height of the letterhead band in points
pub const DEFAULT_LETTERHEAD_HEIGHT: f32 = 100.0;

/// Default height of the title-block header cell in points
pub const DEFAULT_TITLE_BLOCK_HEIGHT: f32 = 42.0;

/// Default height of the footer band in points
pub const DEFAULT_FOOTER_HEIGHT: f32 = 48.0;

/// Minimum letterhead band height: the 32pt title band the letterhead
/// reserves for its two institutional title lines, plus room for logos
pub const MIN_LETTERHEAD_HEIGHT: f32 = 48.0;

/// Minimum title-block height: the report-number baseline sits 31pt
/// below the cell top and needs descender room
pub const MIN_TITLE_BLOCK_HEIGHT: f32 = 36.0;

/// Minimum footer band height: the decorative bar plus the two address
/// baselines below it
pub const MIN_FOOTER_HEIGHT: f32 = 38.0;

/// Font size for the two-line institutional title in the letterhead
pub const LETTERHEAD_TITLE_SIZE: f32 = 11.0;

/// Font size for the report title in the title block
pub const TITLE_SIZE: f32 = 12.0;

/// Font size for the report number, rendered smaller than the title
pub const REPORT_NUMBER_SIZE: f32 = 9.0;

/// Font size for body content
pub const BODY_FONT_SIZE: f32 = 10.0;

/// Font size for the footer address lines
pub const FOOTER_FONT_SIZE: f32 = 8.0;

/// Default character width ratio for text estimation
/// (average character width as a fraction of font size)
pub const DEFAULT_CHAR_WIDTH_RATIO: f32 = 0.5;

/// Default line height multiplier
pub const DEFAULT_LINE_HEIGHT_MULTIPLIER: f32 = 1.2;

/// Inner padding of the body frame in points
pub const BODY_PADDING: f32 = 8.0;

/// Cell padding for tabular body content in points
pub const CELL_PADDING: f32 = 4.0;

/// Border width for the report frame in points
pub const DEFAULT_BORDER_WIDTH: f32 = 1.0;

/// Height of the decorative footer bar in points
pub const FOOTER_BAR_HEIGHT: f32 = 10.0;

/// Regular font resource name registered on every report page
pub const FONT_REGULAR: &str = "F1";

/// Bold font resource name registered on every report page
pub const FONT_BOLD: &str = "F1-Bold";

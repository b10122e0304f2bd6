//! Per-report inputs: identity and body content

use crate::Result;
use crate::constants::*;
use crate::error::ReportError;
use crate::font::FontMetrics;
use crate::geometry::PageGeometry;
use crate::text;

/// The variable identity of a report: its type and serial number.
///
/// Created per render request and never persisted by this crate. The title
/// is displayed fully uppercased regardless of input casing; the report
/// number renders verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportIdentity {
    pub title: String,
    pub report_number: String,
}

impl ReportIdentity {
    pub fn new<S1, S2>(title: S1, report_number: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self {
            title: title.into(),
            report_number: report_number.into(),
        }
    }

    /// Both fields are required by the render input contract
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ReportError::InvalidIdentity("title is empty".to_string()));
        }
        if self.report_number.trim().is_empty() {
            return Err(ReportError::InvalidIdentity(
                "report number is empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Title as displayed in the title block
    pub fn display_title(&self) -> String {
        self.title.to_uppercase()
    }
}

/// Body content of a report.
///
/// The body frame never inspects content beyond this tag: every variant is
/// framed identically, which is what lets analysis certificates, lab
/// bulletins, and future report types share one skeleton.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportContent {
    /// Free-running text, wrapped to the frame width
    Paragraph(String),
    /// A rectangular grid with a bold header row
    Table {
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// Label/value pairs rendered as a two-column form grid
    KeyValueGrid(Vec<(String, String)>),
}

impl ReportContent {
    pub fn paragraph<S: Into<String>>(text: S) -> Self {
        Self::Paragraph(text.into())
    }

    pub fn table(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self::Table { header, rows }
    }

    pub fn key_value_grid(entries: Vec<(String, String)>) -> Self {
        Self::KeyValueGrid(entries)
    }

    /// Check structural validity. Tables must be rectangular: every row
    /// carries exactly the header's column count.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Paragraph(_) => Ok(()),
            Self::Table { header, rows } => {
                if header.is_empty() {
                    return Err(ReportError::InvalidContent(
                        "Table has no columns".to_string(),
                    ));
                }
                for (i, row) in rows.iter().enumerate() {
                    if row.len() != header.len() {
                        return Err(ReportError::InvalidContent(format!(
                            "Row {} has {} cells, expected {}",
                            i,
                            row.len(),
                            header.len()
                        )));
                    }
                }
                Ok(())
            }
            Self::KeyValueGrid(entries) => {
                if entries.is_empty() {
                    return Err(ReportError::InvalidContent(
                        "Key-value grid has no entries".to_string(),
                    ));
                }
                Ok(())
            }
        }
    }

    /// Height in points this content needs inside the body frame.
    ///
    /// This is what overflow detection compares against the fixed body
    /// region; it must never under-estimate.
    pub fn measure(&self, geometry: &PageGeometry, metrics: Option<&dyn FontMetrics>) -> f32 {
        let inner_width = geometry.content_width() - BODY_PADDING * 2.0;
        let content_height = match self {
            Self::Paragraph(body) => {
                text::wrapped_text_height(body, inner_width, BODY_FONT_SIZE, metrics)
            }
            Self::Table { rows, .. } => (rows.len() + 1) as f32 * Self::grid_row_height(),
            Self::KeyValueGrid(entries) => entries.len() as f32 * Self::grid_row_height(),
        };
        content_height + BODY_PADDING * 2.0
    }

    /// Fixed height of one table or grid row
    pub(crate) fn grid_row_height() -> f32 {
        text::line_height(BODY_FONT_SIZE) + CELL_PADDING * 2.0
    }
}

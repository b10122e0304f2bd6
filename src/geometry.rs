//! Physical page geometry for report rendering
//!
//! All renderers take their positions from a [`PageGeometry`] value rather
//! than hard-coding dimensions, so a different paper size or margin never
//! requires renderer changes. Coordinates follow the PDF convention: the
//! origin is the bottom-left corner of the page, y grows upward.

use crate::Result;
use crate::constants::*;
use crate::error::ReportError;

/// Physical dimensions of a report page, in points.
///
/// The page is divided top to bottom into four fixed bands: letterhead,
/// title block, body, and footer. The body height is whatever remains
/// between the title block and the footer; `validate` rejects geometries
/// where nothing remains.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub page_width: f32,
    pub page_height: f32,
    /// Uniform margin on all four sides
    pub margin: f32,
    pub letterhead_height: f32,
    pub title_block_height: f32,
    pub footer_height: f32,
}

impl PageGeometry {
    /// A4 geometry with the default band heights
    pub fn a4() -> Self {
        Self {
            page_width: A4_WIDTH,
            page_height: A4_HEIGHT,
            margin: DEFAULT_MARGIN,
            letterhead_height: DEFAULT_LETTERHEAD_HEIGHT,
            title_block_height: DEFAULT_TITLE_BLOCK_HEIGHT,
            footer_height: DEFAULT_FOOTER_HEIGHT,
        }
    }

    /// Override the page margin
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Override the footer band height
    pub fn with_footer_height(mut self, height: f32) -> Self {
        self.footer_height = height;
        self
    }

    /// Check that the fixed bands fit on the page and leave a usable
    /// body region. A violated geometry is a configuration defect and
    /// must prevent any render.
    pub fn validate(&self) -> Result<()> {
        if self.page_width <= 0.0 || self.page_height <= 0.0 {
            return Err(ReportError::GeometryViolation(format!(
                "Page dimensions must be positive, got {}x{}",
                self.page_width, self.page_height
            )));
        }
        if self.margin < 0.0 {
            return Err(ReportError::GeometryViolation(format!(
                "Margin must be non-negative, got {}",
                self.margin
            )));
        }
        if self.margin * 2.0 >= self.page_width {
            return Err(ReportError::GeometryViolation(format!(
                "Margins ({}pt each) leave no horizontal space on a {}pt page",
                self.margin, self.page_width
            )));
        }
        // Each band must hold the fixed text slots its renderer draws,
        // or "valid" geometry would paint outside its region
        if self.letterhead_height < MIN_LETTERHEAD_HEIGHT {
            return Err(ReportError::GeometryViolation(format!(
                "Letterhead height {}pt is below the {MIN_LETTERHEAD_HEIGHT}pt minimum",
                self.letterhead_height
            )));
        }
        if self.title_block_height < MIN_TITLE_BLOCK_HEIGHT {
            return Err(ReportError::GeometryViolation(format!(
                "Title block height {}pt is below the {MIN_TITLE_BLOCK_HEIGHT}pt minimum",
                self.title_block_height
            )));
        }
        if self.footer_height < MIN_FOOTER_HEIGHT {
            return Err(ReportError::GeometryViolation(format!(
                "Footer height {}pt is below the {MIN_FOOTER_HEIGHT}pt minimum",
                self.footer_height
            )));
        }
        let fixed = self.margin * 2.0
            + self.letterhead_height
            + self.title_block_height
            + self.footer_height;
        if fixed >= self.page_height {
            return Err(ReportError::GeometryViolation(format!(
                "Fixed regions occupy {fixed}pt of a {}pt page, leaving no body region",
                self.page_height
            )));
        }
        Ok(())
    }

    /// Usable width between the left and right margins
    pub fn content_width(&self) -> f32 {
        self.page_width - self.margin * 2.0
    }

    /// Horizontal center of the page
    pub fn center_x(&self) -> f32 {
        self.page_width / 2.0
    }

    /// Top edge of the letterhead band
    pub fn letterhead_top(&self) -> f32 {
        self.page_height - self.margin
    }

    /// Top edge of the title-block header cell
    pub fn title_block_top(&self) -> f32 {
        self.letterhead_top() - self.letterhead_height
    }

    /// Top edge of the body region (bottom edge of the title block)
    pub fn body_top(&self) -> f32 {
        self.title_block_top() - self.title_block_height
    }

    /// Bottom edge of the body region (top edge of the footer band)
    pub fn body_bottom(&self) -> f32 {
        self.margin + self.footer_height
    }

    /// Height of the single-page body region
    pub fn body_height(&self) -> f32 {
        self.body_top() - self.body_bottom()
    }

    /// Top edge of the footer band. Derived from the page bottom only,
    /// never from body content.
    pub fn footer_top(&self) -> f32 {
        self.margin + self.footer_height
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

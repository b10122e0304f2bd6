//! A fixed-layout administrative report composition library for PDFs
//! built on lopdf
//!
//! Composes official report pages (letterhead, title block, bordered
//! body frame, bottom-pinned footer) with exact physical page geometry,
//! so the printed output is dimensionally identical regardless of the
//! report's content. Callers supply a [`ReportIdentity`] and a
//! [`ReportContent`] payload; the static letterhead and footer come from
//! process-wide [`ReportConfig`] loaded once at startup.

use lopdf::{Document, Object, ObjectId, dictionary};
use tracing::{debug, instrument};

mod body;
mod composer;
mod config;
mod constants;
mod drawing;
pub mod error;
mod font;
mod footer;
mod geometry;
mod letterhead;
mod report;
mod text;
mod title_block;

pub use composer::{ReportComposer, ReportPage};
pub use config::{FooterInfo, ImageAsset, Letterhead, ReportConfig};
pub use error::{ReportError, Result};
pub use font::FontMetrics;
#[cfg(feature = "ttf-parser")]
pub use font::TtfFontMetrics;
pub use geometry::PageGeometry;
pub use report::{ReportContent, ReportIdentity};

/// Extension trait for lopdf::Document to add report rendering
/// capabilities
pub trait ReportRendering {
    /// Render one report as a new page in this document
    ///
    /// # Arguments
    /// * `composer` - A composer holding the validated configuration
    /// * `identity` - The report's title and number
    /// * `content` - The body payload; must fit the single-page region
    ///
    /// # Returns
    /// The object id of the created page, or `ContentOverflow` if the
    /// content exceeds the body region
    fn render_report(
        &mut self,
        composer: &ReportComposer,
        identity: &ReportIdentity,
        content: &ReportContent,
    ) -> Result<ObjectId>;
}

impl ReportRendering for Document {
    #[instrument(skip(self, composer, content), fields(title = %identity.title))]
    fn render_report(
        &mut self,
        composer: &ReportComposer,
        identity: &ReportIdentity,
        content: &ReportContent,
    ) -> Result<ObjectId> {
        let pages_id = ensure_pages_tree(self)?;
        debug!("Rendering report into pages tree {:?}", pages_id);
        composer.render(self, pages_id, identity, content)
    }
}

/// Find the document's Pages tree, creating the tree and catalog for a
/// fresh document
fn ensure_pages_tree(doc: &mut Document) -> Result<ObjectId> {
    let root = doc
        .trailer
        .get(b"Root")
        .ok()
        .and_then(|o| o.as_reference().ok());

    if let Some(root_id) = root {
        let Ok(Object::Dictionary(catalog)) = doc.get_object(root_id) else {
            return Err(ReportError::DocumentError(
                "Document root is not a catalog dictionary".to_string(),
            ));
        };
        return catalog
            .get(b"Pages")
            .and_then(|o| o.as_reference())
            .map_err(|_| {
                ReportError::DocumentError("Document catalog has no Pages entry".to_string())
            });
    }

    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => Vec::<Object>::new(),
        "Count" => 0,
    });
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    Ok(pages_id)
}

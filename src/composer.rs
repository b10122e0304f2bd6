//! Report composition: letterhead, title block, body, and footer on one
//! fixed-geometry page

use crate::Result;
use crate::body;
use crate::config::ReportConfig;
use crate::constants::{FONT_BOLD, FONT_REGULAR};
use crate::drawing::{self, ImageRegistry, PlacedImage};
use crate::error::ReportError;
use crate::footer;
use crate::letterhead;
use crate::report::{ReportContent, ReportIdentity};
use crate::title_block;
use lopdf::{Document, Object, ObjectId, content::Operation, dictionary};
use tracing::{debug, instrument, trace};

/// A fully composed report page, not yet attached to a document.
///
/// `operations` is the complete content stream; `images` holds the image
/// XObjects the stream references by name. Pure data, so tests can check
/// composition without a `Document`.
#[derive(Debug)]
pub struct ReportPage {
    pub operations: Vec<Operation>,
    pub images: Vec<PlacedImage>,
}

/// Composes report pages from a validated configuration.
///
/// One composer renders any number of reports; every render is a pure
/// function of its inputs plus the immutable configuration, so composers
/// may be shared across threads freely.
#[derive(Debug, Clone)]
pub struct ReportComposer {
    config: ReportConfig,
}

impl ReportComposer {
    /// Create a composer, validating the page geometry up front. A
    /// geometry that cannot hold the fixed regions never renders anything.
    pub fn new(config: ReportConfig) -> Result<Self> {
        config.geometry.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Height the body region offers to content, for callers that split
    /// overflowing content across pages
    pub fn body_capacity(&self) -> f32 {
        self.config.geometry.body_height()
    }

    /// Height `content` needs inside the body frame
    pub fn measure(&self, content: &ReportContent) -> f32 {
        content.measure(&self.config.geometry, self.config.font_metrics())
    }

    /// Check that `content` fits the single-page body region. Overflow is
    /// surfaced, never clipped and never allowed to push the footer.
    pub fn check_fit(&self, content: &ReportContent) -> Result<()> {
        let required = self.measure(content);
        let available = self.body_capacity();
        if required > available {
            return Err(ReportError::ContentOverflow {
                required,
                available,
            });
        }
        Ok(())
    }

    /// Compose one report page without touching a document.
    #[instrument(skip(self, content), fields(title = %identity.title))]
    pub fn compose(
        &self,
        identity: &ReportIdentity,
        content: &ReportContent,
    ) -> Result<ReportPage> {
        identity.validate()?;
        content.validate()?;
        self.check_fit(content)?;

        let geometry = &self.config.geometry;
        let metrics = self.config.font_metrics();
        let mut images = ImageRegistry::new();
        let mut operations = Vec::new();

        operations.extend(letterhead::operations(
            &self.config.letterhead,
            geometry,
            metrics,
            &mut images,
        ));
        operations.extend(body::frame_operations(geometry));
        operations.extend(title_block::operations(identity, geometry, metrics));
        operations.extend(body::content_operations(content, geometry, metrics));
        operations.extend(footer::operations(
            &self.config.footer,
            geometry,
            metrics,
            &mut images,
        ));

        trace!(
            "Composed page with {} operations, {} images",
            operations.len(),
            images.len()
        );
        Ok(ReportPage {
            operations,
            images: images.into_images(),
        })
    }

    /// Compose a report and write it into `doc` as a new page under
    /// `pages_id`, returning the page's object id. The page's MediaBox is
    /// sized exactly to the configured geometry.
    pub fn render(
        &self,
        doc: &mut Document,
        pages_id: ObjectId,
        identity: &ReportIdentity,
        content: &ReportContent,
    ) -> Result<ObjectId> {
        let page = self.compose(identity, content)?;
        let geometry = &self.config.geometry;

        let resources_id = page_resources(doc, page.images)?;
        let media_box = vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(geometry.page_width),
            Object::Real(geometry.page_height),
        ];
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => media_box,
            "Resources" => resources_id,
        });
        attach_page(doc, pages_id, page_id)?;

        drawing::add_operations_to_page(doc, page_id, page.operations)?;
        debug!("Rendered report page {:?}", page_id);
        Ok(page_id)
    }
}

/// Build the resource dictionary for a report page: the regular and bold
/// text fonts plus any image XObjects the content stream references
fn page_resources(doc: &mut Document, images: Vec<PlacedImage>) -> Result<ObjectId> {
    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });

    let mut fonts = lopdf::Dictionary::new();
    fonts.set(FONT_REGULAR, regular_id);
    fonts.set(FONT_BOLD, bold_id);

    let mut resources = lopdf::Dictionary::new();
    resources.set("Font", fonts);
    if !images.is_empty() {
        let mut xobjects = lopdf::Dictionary::new();
        for image in images {
            let stream_id = doc.add_object(Object::Stream(image.stream));
            xobjects.set(image.name, Object::Reference(stream_id));
        }
        resources.set("XObject", xobjects);
    }
    Ok(doc.add_object(resources))
}

/// Append a page to the Kids array of its Pages parent and bump Count
fn attach_page(doc: &mut Document, pages_id: ObjectId, page_id: ObjectId) -> Result<()> {
    let Ok(Object::Dictionary(pages)) = doc.get_object_mut(pages_id) else {
        return Err(ReportError::DocumentError(format!(
            "Pages object {pages_id:?} is not a dictionary"
        )));
    };
    if let Ok(Object::Array(kids)) = pages.get_mut(b"Kids") {
        kids.push(page_id.into());
    } else {
        return Err(ReportError::DocumentError(
            "Pages object has no Kids array".to_string(),
        ));
    }
    let count = pages.get(b"Count").and_then(|o| o.as_i64()).unwrap_or(0);
    pages.set("Count", count + 1);
    Ok(())
}

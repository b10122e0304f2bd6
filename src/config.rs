//! Static report configuration: letterhead, footer, and shared assets
//!
//! Configuration is loaded once at process start and treated as read-only
//! for the process lifetime. Renders borrow it immutably, so reports may be
//! composed from multiple threads without coordination.

use crate::font::FontMetrics;
use crate::geometry::PageGeometry;
use std::path::Path;
use std::sync::Arc;
use tracing::warn;

/// An image asset with a fixed footprint on the page.
///
/// The footprint is part of the layout contract: an asset whose bytes are
/// missing or fail to decode still reserves exactly the same region, so a
/// broken logo never shifts the layout. Sizes are in points.
#[derive(Debug, Clone)]
pub struct ImageAsset {
    pub width: f32,
    pub height: f32,
    data: Option<Vec<u8>>,
}

impl ImageAsset {
    /// Asset from in-memory encoded image bytes (PNG or JPEG)
    pub fn from_bytes(data: Vec<u8>, width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            data: Some(data),
        }
    }

    /// Asset read from a file. A read failure degrades to a placeholder
    /// of the same footprint rather than failing the configuration.
    pub fn from_file<P: AsRef<Path>>(path: P, width: f32, height: f32) -> Self {
        match std::fs::read(path.as_ref()) {
            Ok(data) => Self::from_bytes(data, width, height),
            Err(e) => {
                warn!(
                    "Failed to read image asset {:?}: {e}; using placeholder",
                    path.as_ref()
                );
                Self::placeholder(width, height)
            }
        }
    }

    /// An empty asset that only reserves its footprint
    pub fn placeholder(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            data: None,
        }
    }

    /// Encoded image bytes, if the asset loaded
    pub fn data(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }

    pub fn is_placeholder(&self) -> bool {
        self.data.is_none()
    }
}

/// The invariant top block of every report: two logos and a centered
/// two-line institutional title
#[derive(Debug, Clone)]
pub struct Letterhead {
    /// Wide primary logo, placed at the left margin
    pub primary_logo: ImageAsset,
    /// Small badge logo, centered in the right column
    pub badge_logo: ImageAsset,
    pub title_line1: String,
    pub title_line2: String,
}

impl Letterhead {
    pub fn new<S1, S2>(
        primary_logo: ImageAsset,
        badge_logo: ImageAsset,
        title_line1: S1,
        title_line2: S2,
    ) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self {
            primary_logo,
            badge_logo,
            title_line1: title_line1.into(),
            title_line2: title_line2.into(),
        }
    }
}

/// The invariant bottom block: a full-width decorative bar above a
/// centered two-line address
#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub bar: ImageAsset,
    pub address_line1: String,
    pub address_line2: String,
}

impl FooterInfo {
    pub fn new<S1, S2>(bar: ImageAsset, address_line1: S1, address_line2: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self {
            bar,
            address_line1: address_line1.into(),
            address_line2: address_line2.into(),
        }
    }
}

/// Process-wide report configuration: page geometry plus the static
/// letterhead and footer blocks.
#[derive(Clone)]
pub struct ReportConfig {
    pub geometry: PageGeometry,
    pub letterhead: Letterhead,
    pub footer: FooterInfo,
    font_metrics: Option<Arc<dyn FontMetrics + Send + Sync>>,
}

impl ReportConfig {
    pub fn new(letterhead: Letterhead, footer: FooterInfo) -> Self {
        Self {
            geometry: PageGeometry::a4(),
            letterhead,
            footer,
            font_metrics: None,
        }
    }

    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Supply real font metrics for accurate centering and overflow
    /// measurement. Shared, since configuration may serve parallel renders.
    pub fn with_font_metrics(mut self, metrics: Arc<dyn FontMetrics + Send + Sync>) -> Self {
        self.font_metrics = Some(metrics);
        self
    }

    pub fn font_metrics(&self) -> Option<&dyn FontMetrics> {
        self.font_metrics.as_deref().map(|m| m as &dyn FontMetrics)
    }
}

impl std::fmt::Debug for ReportConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportConfig")
            .field("geometry", &self.geometry)
            .field("letterhead", &self.letterhead)
            .field("footer", &self.footer)
            .field("font_metrics", &self.font_metrics.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> ReportConfig {
        ReportConfig::new(
            Letterhead::new(
                ImageAsset::placeholder(150.0, 48.0),
                ImageAsset::placeholder(48.0, 48.0),
                "MINISTERE DE L'AGRICULTURE",
                "Service National des Semences",
            ),
            FooterInfo::new(
                ImageAsset::placeholder(515.0, 10.0),
                "B.P. 1234, Avenue de la Nation",
                "Tel: +000 00 00 00 00",
            ),
        )
    }

    #[test]
    fn test_missing_file_degrades_to_placeholder() {
        let asset = ImageAsset::from_file("/nonexistent/logo.png", 150.0, 48.0);
        assert!(asset.is_placeholder());
        assert_eq!(asset.width, 150.0);
        assert_eq!(asset.height, 48.0);
    }

    #[test]
    fn test_placeholder_keeps_footprint_of_loaded_asset() {
        let loaded = ImageAsset::from_bytes(vec![1, 2, 3], 150.0, 48.0);
        let missing = ImageAsset::placeholder(150.0, 48.0);
        assert_eq!((loaded.width, loaded.height), (missing.width, missing.height));
    }

    #[test]
    fn test_config_defaults_to_a4() {
        let config = sample_config();
        assert_eq!(config.geometry, PageGeometry::a4());
        assert!(config.font_metrics().is_none());
    }
}

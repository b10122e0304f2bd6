//! Seed analysis certificate with tabular results

use lopdf::Document;
use lopdf_report::{
    FooterInfo, ImageAsset, Letterhead, ReportComposer, ReportConfig, ReportContent,
    ReportIdentity, ReportRendering,
};
use tracing_subscriber::EnvFilter;

/// Synthesize a flat-color PNG so the demo runs without asset files
fn solid_png(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb(rgb));
    let mut buf = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut buf, image::ImageFormat::Png)
        .expect("PNG encoding should not fail");
    buf.into_inner()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    let config = ReportConfig::new(
        Letterhead::new(
            ImageAsset::from_bytes(solid_png(300, 96, [20, 90, 50]), 150.0, 48.0),
            ImageAsset::from_bytes(solid_png(96, 96, [160, 130, 30]), 48.0, 48.0),
            "MINISTERE DE L'AGRICULTURE ET DE L'ELEVAGE",
            "Service National des Semences",
        ),
        FooterInfo::new(
            ImageAsset::from_bytes(solid_png(1030, 20, [20, 90, 50]), 515.0, 10.0),
            "B.P. 1234, Avenue de la Nation, Quartier Administratif",
            "Tel: +000 00 00 00 00 - semences@agriculture.gouv",
        ),
    );
    let composer = ReportComposer::new(config)?;

    let identity = ReportIdentity::new("Certificat d'Analyse", "No. 2024-00123");
    let content = ReportContent::table(
        vec![
            "Espece".into(),
            "Variete".into(),
            "Lot".into(),
            "Germination".into(),
            "Purete".into(),
        ],
        vec![
            vec![
                "Zea mays".into(),
                "Kasai 1".into(),
                "L-2024-017".into(),
                "92%".into(),
                "99.1%".into(),
            ],
            vec![
                "Oryza sativa".into(),
                "Nerica 4".into(),
                "L-2024-018".into(),
                "88%".into(),
                "98.6%".into(),
            ],
            vec![
                "Arachis hypogaea".into(),
                "JL 24".into(),
                "L-2024-019".into(),
                "90%".into(),
                "99.4%".into(),
            ],
        ],
    );

    let mut doc = Document::with_version("1.5");
    doc.render_report(&composer, &identity, &content)?;
    doc.save("analysis_certificate.pdf")?;
    println!("PDF saved as 'analysis_certificate.pdf'");

    Ok(())
}

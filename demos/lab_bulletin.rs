//! Lab bulletin with paragraph content, split across pages on overflow

use lopdf::Document;
use lopdf_report::{
    FooterInfo, ImageAsset, Letterhead, ReportComposer, ReportConfig, ReportContent,
    ReportError, ReportIdentity, ReportRendering,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Assets resolved from disk; missing files degrade to placeholders
    // of the same footprint, so the bulletin still prints correctly shaped
    let config = ReportConfig::new(
        Letterhead::new(
            ImageAsset::from_file("assets/logo_wide.png", 150.0, 48.0),
            ImageAsset::from_file("assets/badge.png", 48.0, 48.0),
            "MINISTERE DE L'AGRICULTURE ET DE L'ELEVAGE",
            "Laboratoire National d'Analyse des Semences",
        ),
        FooterInfo::new(
            ImageAsset::from_file("assets/bar.png", 515.0, 10.0),
            "B.P. 1234, Avenue de la Nation, Quartier Administratif",
            "Tel: +000 00 00 00 00 - labo@agriculture.gouv",
        ),
    );
    let composer = ReportComposer::new(config)?;

    let identity = ReportIdentity::new("Bulletin d'Analyse", "No. 2024-00124");
    let paragraphs = [
        "L'echantillon du lot L-2024-018 a ete receptionne le 12 mars et \
         analyse selon les methodes ISTA en vigueur.",
        "Les essais de germination conduits sur quatre repetitions de cent \
         semences donnent un taux moyen de 88%, superieur au seuil de \
         certification de 80%.",
        "La purete specifique mesuree est de 98.6%. Aucune semence d'espece \
         etrangere cultivee n'a ete detectee dans l'echantillon soumis.",
    ];

    let mut doc = Document::with_version("1.5");
    // One render per page: if a body does not fit, split the paragraphs
    // rather than letting the composer clip anything
    let mut pending = paragraphs.to_vec();
    while !pending.is_empty() {
        let mut take = pending.len();
        loop {
            let body = pending[..take].join("\n\n");
            match doc.render_report(&composer, &identity, &ReportContent::paragraph(body)) {
                Ok(_) => break,
                Err(ReportError::ContentOverflow { .. }) if take > 1 => take -= 1,
                Err(e) => return Err(e.into()),
            }
        }
        pending.drain(..take);
    }

    doc.save("lab_bulletin.pdf")?;
    println!("PDF saved as 'lab_bulletin.pdf'");
    Ok(())
}

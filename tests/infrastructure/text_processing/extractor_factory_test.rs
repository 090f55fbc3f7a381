use std::sync::Arc;

use docent::domain::UploadedFile;
use docent::infrastructure::text_processing::{
    ExtractorFactory, ExtractorFactoryError, OxidePdfReader,
};
use docent::presentation::config::ExtractionSettings;

use crate::helpers::FixedOcr;

#[test]
fn given_blank_tesseract_path_when_creating_ocr_then_returns_error() {
    let settings = ExtractionSettings {
        tesseract_path: "  ".to_string(),
        ..ExtractionSettings::default()
    };

    let result = ExtractorFactory::create_ocr(&settings);

    assert!(matches!(result, Err(ExtractorFactoryError::MissingTesseractPath)));
}

#[test]
fn given_non_positive_render_dpi_when_creating_then_returns_error() {
    let settings = ExtractionSettings {
        render_dpi: 0.0,
        ..ExtractionSettings::default()
    };

    let result = ExtractorFactory::create(
        &settings,
        Arc::new(FixedOcr("x")),
        Arc::new(OxidePdfReader::new()),
    );

    assert!(matches!(result, Err(ExtractorFactoryError::InvalidRenderDpi(_))));
}

#[test]
fn given_zero_timeout_when_creating_then_returns_error() {
    let settings = ExtractionSettings {
        timeout_secs: 0,
        ..ExtractionSettings::default()
    };

    let result = ExtractorFactory::create(
        &settings,
        Arc::new(FixedOcr("x")),
        Arc::new(OxidePdfReader::new()),
    );

    assert!(matches!(result, Err(ExtractorFactoryError::InvalidTimeout)));
}

#[tokio::test]
async fn given_default_settings_when_creating_then_dispatcher_handles_csv() {
    let extractor = ExtractorFactory::create(
        &ExtractionSettings::default(),
        Arc::new(FixedOcr("x")),
        Arc::new(OxidePdfReader::new()),
    )
    .unwrap();

    let extraction = extractor
        .extract(&UploadedFile::new("t.csv", b"a\n1\n".to_vec()), None)
        .await
        .unwrap();

    assert_eq!(extraction.text, "   a\n0  1");
}

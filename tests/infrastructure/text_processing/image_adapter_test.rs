use std::sync::Arc;
use std::time::Duration;

use image::GenericImageView;

use docent::application::ports::{DocumentExtractor, ExtractionError, OcrError};
use docent::domain::UploadedFile;
use docent::infrastructure::text_processing::ImageAdapter;

use crate::helpers::{FailingOcr, FixedOcr, png_bytes};

#[tokio::test]
async fn given_png_when_extracting_then_returns_preview_and_ocr_text() {
    let adapter = ImageAdapter::new(Arc::new(FixedOcr("Invoice total: $42")), Duration::from_secs(5));
    let file = UploadedFile::new("scan.png", png_bytes(8, 6));

    let extraction = adapter.extract(&file, None).await.unwrap();

    assert!(extraction.supported);
    assert_eq!(extraction.text, "Invoice total: $42");
    assert_eq!(extraction.preview.unwrap().dimensions(), (8, 6));
}

#[tokio::test]
async fn given_corrupt_image_when_extracting_then_returns_decode_error() {
    let adapter = ImageAdapter::new(Arc::new(FixedOcr("unused")), Duration::from_secs(5));
    let file = UploadedFile::new("scan.png", b"not really a png".to_vec());

    let result = adapter.extract(&file, None).await;

    assert!(matches!(result, Err(ExtractionError::DecodeFailed(_))));
}

#[tokio::test]
async fn given_ocr_failure_when_extracting_then_error_is_propagated() {
    let adapter = ImageAdapter::new(Arc::new(FailingOcr), Duration::from_secs(5));
    let file = UploadedFile::new("scan.png", png_bytes(4, 4));

    let result = adapter.extract(&file, None).await;

    assert!(matches!(
        result,
        Err(ExtractionError::Ocr(OcrError::RecognitionFailed(_)))
    ));
}

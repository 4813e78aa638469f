use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ExtractError;
use crate::kind::DocumentKind;
use crate::ocr::{OcrConfig, OcrExtractor};
use crate::pdf::PdfExtractor;
use crate::traits::TextExtractor;

/// Routes each document kind to the extractor registered for it
pub struct CompositeExtractor {
    extractors: HashMap<DocumentKind, Arc<dyn TextExtractor>>,
}

impl CompositeExtractor {
    pub fn new(extractors: Vec<(DocumentKind, Arc<dyn TextExtractor>)>) -> Self {
        Self {
            extractors: extractors.into_iter().collect(),
        }
    }

    /// PDF text layer for PDFs, OCR for JPEG and PNG
    pub fn standard(ocr: OcrConfig) -> Self {
        let pdf: Arc<dyn TextExtractor> = Arc::new(PdfExtractor::new());
        let ocr: Arc<dyn TextExtractor> = Arc::new(OcrExtractor::new(ocr));

        Self::new(vec![
            (DocumentKind::Pdf, pdf),
            (DocumentKind::Jpeg, Arc::clone(&ocr)),
            (DocumentKind::Png, ocr),
        ])
    }
}

#[async_trait]
impl TextExtractor for CompositeExtractor {
    async fn extract_text(&self, data: &[u8], kind: DocumentKind) -> Result<String, ExtractError> {
        let extractor = self
            .extractors
            .get(&kind)
            .ok_or_else(|| ExtractError::UnsupportedContentType(kind.as_mime().to_string()))?;

        extractor.extract_text(data, kind).await
    }
}

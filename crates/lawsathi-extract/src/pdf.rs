use std::io::Write;
use std::path::Path;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::error::ExtractError;
use crate::kind::DocumentKind;
use crate::traits::TextExtractor;

/// Direct text-layer extraction for PDFs
#[derive(Debug, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(path: &Path) -> Result<Vec<String>, ExtractError> {
        let mut doc = PdfDocument::open(path)
            .map_err(|e| ExtractError::Pdf(format!("failed to parse PDF: {e}")))?;

        let page_count = doc
            .page_count()
            .map_err(|e| ExtractError::Pdf(format!("failed to read page count: {e}")))?;

        let mut pages = Vec::with_capacity(page_count);
        for page_index in 0..page_count {
            let text = doc.extract_text(page_index).map_err(|e| {
                ExtractError::Pdf(format!("failed to read page {}: {e}", page_index + 1))
            })?;
            pages.push(text);
        }

        Ok(pages)
    }
}

#[async_trait]
impl TextExtractor for PdfExtractor {
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    async fn extract_text(&self, data: &[u8], kind: DocumentKind) -> Result<String, ExtractError> {
        if kind != DocumentKind::Pdf {
            return Err(ExtractError::UnsupportedContentType(kind.as_mime().to_string()));
        }

        let mut temp_file = tempfile::Builder::new()
            .suffix(kind.extension())
            .tempfile()
            .map_err(|e| ExtractError::Pdf(format!("failed to create temp file: {e}")))?;

        temp_file
            .write_all(data)
            .map_err(|e| ExtractError::Pdf(format!("failed to write temp file: {e}")))?;

        // The temp file is removed when `temp_file` drops, after the blocking task joins
        let temp_path = temp_file.path().to_path_buf();

        let pages = tokio::task::spawn_blocking(move || Self::extract_pages(&temp_path))
            .await
            .map_err(|e| ExtractError::Pdf(format!("task join error: {e}")))??;

        tracing::info!(page_count = pages.len(), "PDF text extraction complete");

        let mut text = String::new();
        for page in &pages {
            text.push_str(page);
            text.push('\n');
        }

        Ok(text.trim().to_string())
    }
}

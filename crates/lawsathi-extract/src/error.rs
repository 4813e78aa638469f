use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("image OCR failed: {0}")]
    Image(String),
}

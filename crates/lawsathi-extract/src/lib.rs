//! Turns uploaded document bytes into plain text.
//!
//! PDFs are parsed directly; raster images go through OCR. Callers pick
//! an extractor by [`DocumentKind`] or use [`CompositeExtractor`] to
//! dispatch automatically.

pub mod kind;
pub mod error;
pub mod traits;
pub mod pdf;
pub mod ocr;
pub mod composite;

pub use kind::DocumentKind;
pub use error::ExtractError;
pub use traits::TextExtractor;
pub use pdf::PdfExtractor;
pub use ocr::{OcrConfig, OcrExtractor};
pub use composite::CompositeExtractor;

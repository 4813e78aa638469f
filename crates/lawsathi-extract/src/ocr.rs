use std::io::Write;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::ExtractError;
use crate::kind::DocumentKind;
use crate::traits::TextExtractor;

/// Settings for the `tesseract` command-line engine
#[derive(Debug, Clone)]
pub struct OcrConfig {
    /// Binary name or absolute path
    pub binary: String,
    /// Tesseract language set, e.g. `eng+hin`
    pub languages: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            binary: "tesseract".to_string(),
            languages: "eng+hin".to_string(),
        }
    }
}

/// Optical character recognition for scanned images
#[derive(Debug, Default)]
pub struct OcrExtractor {
    config: OcrConfig,
}

impl OcrExtractor {
    pub fn new(config: OcrConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl TextExtractor for OcrExtractor {
    #[tracing::instrument(skip(self, data), fields(bytes = data.len(), languages = %self.config.languages))]
    async fn extract_text(&self, data: &[u8], kind: DocumentKind) -> Result<String, ExtractError> {
        if !kind.is_image() {
            return Err(ExtractError::UnsupportedContentType(kind.as_mime().to_string()));
        }

        let mut temp_file = tempfile::Builder::new()
            .suffix(kind.extension())
            .tempfile()
            .map_err(|e| ExtractError::Image(format!("failed to create temp file: {e}")))?;

        temp_file
            .write_all(data)
            .and_then(|_| temp_file.flush())
            .map_err(|e| ExtractError::Image(format!("failed to write temp file: {e}")))?;

        let output = Command::new(&self.config.binary)
            .arg(temp_file.path())
            .arg("stdout")
            .arg("-l")
            .arg(&self.config.languages)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                ExtractError::Image(format!("failed to run {}: {e}", self.config.binary))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExtractError::Image(format!(
                "{} exited with {}: {}",
                self.config.binary,
                output.status,
                stderr.trim()
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
        tracing::info!(chars = text.chars().count(), "OCR extraction complete");

        Ok(text)
    }
}

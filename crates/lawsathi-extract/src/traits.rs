use async_trait::async_trait;

use crate::error::ExtractError;
use crate::kind::DocumentKind;

#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Best-effort plain text for `data`, trimmed of surrounding whitespace
    async fn extract_text(&self, data: &[u8], kind: DocumentKind) -> Result<String, ExtractError>;
}

use async_trait::async_trait;
use crate::models::{ChatHistoryEntry, ChatMessage, DocumentUpload};
use crate::error::Result;

/// Trait for database persistence operations
///
/// Each call writes or reads independent documents; no operation spans
/// more than one record atomically.
#[async_trait]
pub trait PersistenceClient: Send + Sync {
    /// Insert a single chat message
    async fn save_chat_message(&self, message: ChatMessage) -> Result<()>;

    /// Insert a single uploaded-document record
    async fn save_document(&self, document: DocumentUpload) -> Result<()>;

    /// Chat messages for a session, oldest first, at most `limit` entries
    async fn get_chat_history(&self, session_id: &str, limit: i64) -> Result<Vec<ChatHistoryEntry>>;
}

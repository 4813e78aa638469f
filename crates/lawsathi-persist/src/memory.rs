use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::models::{ChatHistoryEntry, ChatMessage, DocumentUpload};
use crate::trait_client::PersistenceClient;

/// Process-local store with the same ordering and limit semantics as the
/// MongoDB backend. Used for tests and for running without a database.
#[derive(Default)]
pub struct InMemoryPersistenceClient {
    chat_messages: RwLock<Vec<ChatMessage>>,
    documents: RwLock<Vec<DocumentUpload>>,
}

impl InMemoryPersistenceClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored chat message, in insertion order
    pub async fn chat_messages(&self) -> Vec<ChatMessage> {
        self.chat_messages.read().await.clone()
    }

    /// Snapshot of every stored document record, in insertion order
    pub async fn documents(&self) -> Vec<DocumentUpload> {
        self.documents.read().await.clone()
    }
}

#[async_trait]
impl PersistenceClient for InMemoryPersistenceClient {
    async fn save_chat_message(&self, message: ChatMessage) -> Result<()> {
        self.chat_messages.write().await.push(message);
        Ok(())
    }

    async fn save_document(&self, document: DocumentUpload) -> Result<()> {
        self.documents.write().await.push(document);
        Ok(())
    }

    async fn get_chat_history(&self, session_id: &str, limit: i64) -> Result<Vec<ChatHistoryEntry>> {
        let mut messages: Vec<ChatMessage> = self
            .chat_messages
            .read()
            .await
            .iter()
            .filter(|m| m.session_id == session_id)
            .cloned()
            .collect();

        // Stable sort keeps insertion order for equal timestamps
        messages.sort_by_key(|m| m.timestamp);

        // A non-positive limit means "no limit", as in MongoDB
        if limit > 0 {
            messages.truncate(limit as usize);
        }

        Ok(messages.into_iter().map(ChatHistoryEntry::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MessageType;
    use chrono::{Duration, Utc};

    fn message_at(session: &str, text: &str, offset_secs: i64) -> ChatMessage {
        let mut msg = ChatMessage::new(session, text, "answer", MessageType::Text);
        msg.timestamp = Utc::now() + Duration::seconds(offset_secs);
        msg
    }

    #[tokio::test]
    async fn test_history_is_sorted_and_scoped_to_session() {
        let store = InMemoryPersistenceClient::new();
        store.save_chat_message(message_at("a", "second", 10)).await.unwrap();
        store.save_chat_message(message_at("b", "other", 5)).await.unwrap();
        store.save_chat_message(message_at("a", "first", 0)).await.unwrap();

        let history = store.get_chat_history("a", 100).await.unwrap();

        let texts: Vec<&str> = history.iter().map(|h| h.message.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_history_respects_limit() {
        let store = InMemoryPersistenceClient::new();
        for i in 0..5 {
            store.save_chat_message(message_at("a", &format!("m{}", i), i)).await.unwrap();
        }

        let history = store.get_chat_history("a", 3).await.unwrap();

        assert_eq!(history.len(), 3);
        assert_eq!(history[0].message, "m0");
        assert_eq!(history[2].message, "m2");
    }

    #[tokio::test]
    async fn test_unknown_session_is_empty() {
        let store = InMemoryPersistenceClient::new();
        assert!(store.get_chat_history("nobody", 100).await.unwrap().is_empty());
    }
}

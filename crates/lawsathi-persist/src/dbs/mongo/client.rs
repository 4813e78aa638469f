use async_trait::async_trait;
use mongodb::Client;

use crate::dbs::mongo::repositories::{MongoChatMessageRepository, MongoDocumentRepository};
use crate::error::{PersistError, Result};
use crate::models::{ChatHistoryEntry, ChatMessage, DocumentUpload};
use crate::trait_client::PersistenceClient;

pub struct MongoPersistenceClient {
    client: Client,
    chat_repo: MongoChatMessageRepository,
    document_repo: MongoDocumentRepository,
}

impl MongoPersistenceClient {
    /// Connect to MongoDB and create client
    pub async fn connect(mongodb_uri: &str, database: &str) -> Result<Self> {
        let client = Client::with_uri_str(mongodb_uri)
            .await
            .map_err(|e| PersistError::Connection(e.to_string()))?;

        let chat_repo = MongoChatMessageRepository::new(&client, database);
        let document_repo = MongoDocumentRepository::new(&client, database);

        tracing::info!(database = %database, "MongoDB client ready");

        Ok(Self {
            client,
            chat_repo,
            document_repo,
        })
    }

    /// Close pooled connections; call once during shutdown
    pub async fn shutdown(&self) {
        self.client.clone().shutdown().await;
    }
}

#[async_trait]
impl PersistenceClient for MongoPersistenceClient {
    async fn save_chat_message(&self, message: ChatMessage) -> Result<()> {
        self.chat_repo.save_message(message.into()).await
    }

    async fn save_document(&self, document: DocumentUpload) -> Result<()> {
        self.document_repo.save_document(document.into()).await
    }

    async fn get_chat_history(&self, session_id: &str, limit: i64) -> Result<Vec<ChatHistoryEntry>> {
        self.chat_repo.get_history(session_id, limit).await
    }
}

use bson::{doc, Document};
use mongodb::{Client, Collection};
use futures::TryStreamExt;

use crate::dbs::mongo::models::{history_entry_from_document, MongoChatMessage};
use crate::error::Result;
use crate::models::ChatHistoryEntry;

#[derive(Clone)]
pub struct MongoChatMessageRepository {
    collection: Collection<MongoChatMessage>,
}

impl MongoChatMessageRepository {
    pub fn new(client: &Client, db_name: &str) -> Self {
        let collection = client.database(db_name).collection("chat_messages");
        Self { collection }
    }

    pub async fn save_message(&self, message: MongoChatMessage) -> Result<()> {
        self.collection.insert_one(&message).await?;
        Ok(())
    }

    /// Messages for a session ordered by timestamp ascending
    pub async fn get_history(&self, session_id: &str, limit: i64) -> Result<Vec<ChatHistoryEntry>> {
        // Read untyped so records with missing fields still project
        let raw = self.collection.clone_with_type::<Document>();

        let filter = doc! { "session_id": session_id };
        let documents: Vec<Document> = raw
            .find(filter)
            .sort(doc! { "timestamp": 1 })
            .limit(limit)
            .await?
            .try_collect()
            .await?;

        Ok(documents.iter().map(history_entry_from_document).collect())
    }
}

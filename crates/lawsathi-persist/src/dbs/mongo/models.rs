use bson::{Bson, Document};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{ChatHistoryEntry, ChatMessage, DocumentUpload, MessageType};

/// MongoDB-specific chat message (timestamps stored as BSON dates)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoChatMessage {
    pub id: String,
    pub session_id: String,
    pub message: String,
    pub response: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub timestamp: DateTime<Utc>,
    pub message_type: MessageType,
}

/// MongoDB-specific document upload record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoDocumentUpload {
    pub id: String,
    pub session_id: String,
    pub filename: String,
    pub extracted_text: String,
    pub simplified_explanation: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub timestamp: DateTime<Utc>,
}

impl From<ChatMessage> for MongoChatMessage {
    fn from(msg: ChatMessage) -> Self {
        Self {
            id: msg.id,
            session_id: msg.session_id,
            message: msg.message,
            response: msg.response,
            timestamp: msg.timestamp,
            message_type: msg.message_type,
        }
    }
}

impl From<DocumentUpload> for MongoDocumentUpload {
    fn from(doc: DocumentUpload) -> Self {
        Self {
            id: doc.id,
            session_id: doc.session_id,
            filename: doc.filename,
            extracted_text: doc.extracted_text,
            simplified_explanation: doc.simplified_explanation,
            timestamp: doc.timestamp,
        }
    }
}

/// Project a raw stored chat document onto a history entry
///
/// Records written by older deployments may lack fields or store the
/// timestamp as a string, so every field falls back instead of failing.
pub fn history_entry_from_document(doc: &Document) -> ChatHistoryEntry {
    let id = match doc.get_str("id") {
        Ok(id) => id.to_string(),
        Err(_) => match doc.get("_id") {
            Some(Bson::ObjectId(oid)) => oid.to_hex(),
            Some(Bson::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        },
    };

    let text = |key: &str| doc.get_str(key).unwrap_or_default().to_string();

    let timestamp = match doc.get("timestamp") {
        Some(Bson::DateTime(dt)) => Some(dt.to_chrono()),
        Some(Bson::String(s)) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        _ => None,
    };

    ChatHistoryEntry {
        id,
        session_id: text("session_id"),
        message: text("message"),
        response: text("response"),
        timestamp,
        message_type: MessageType::parse_or_default(doc.get_str("message_type").ok()),
    }
}

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// One chat turn: the user's input and the assistant's answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub session_id: String,
    pub message: String,
    pub response: String,
    pub timestamp: DateTime<Utc>,
    pub message_type: MessageType,
}

impl ChatMessage {
    pub fn new(
        session_id: impl Into<String>,
        message: impl Into<String>,
        response: impl Into<String>,
        message_type: MessageType,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            session_id: session_id.into(),
            message: message.into(),
            response: response.into(),
            timestamp: Utc::now(),
            message_type,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    #[default]
    Text,
    /// Reserved for spoken input; nothing produces it yet
    Voice,
    Document,
}

impl MessageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Voice => "voice",
            Self::Document => "document",
        }
    }

    /// Lenient parse used when reading back stored records
    pub fn parse_or_default(value: Option<&str>) -> Self {
        match value {
            Some("voice") => Self::Voice,
            Some("document") => Self::Document,
            _ => Self::Text,
        }
    }
}

/// History row projected from a stored chat message
///
/// Every field has a fallback so partially written records still render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatHistoryEntry {
    pub id: String,
    pub session_id: String,
    pub message: String,
    pub response: String,
    pub timestamp: Option<DateTime<Utc>>,
    pub message_type: MessageType,
}

impl From<ChatMessage> for ChatHistoryEntry {
    fn from(msg: ChatMessage) -> Self {
        Self {
            id: msg.id,
            session_id: msg.session_id,
            message: msg.message,
            response: msg.response,
            timestamp: Some(msg.timestamp),
            message_type: msg.message_type,
        }
    }
}

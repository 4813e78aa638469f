mod chat_message;
mod document;

pub use chat_message::{ChatHistoryEntry, ChatMessage, MessageType};
pub use document::DocumentUpload;

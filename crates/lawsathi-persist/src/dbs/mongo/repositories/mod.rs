pub mod chat_message;
pub mod document;

pub use chat_message::MongoChatMessageRepository;
pub use document::MongoDocumentRepository;

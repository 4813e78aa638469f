pub mod models;
pub mod error;
pub mod trait_client;
pub mod memory;

#[cfg(feature = "mongodb")]
pub mod dbs;

pub use models::{ChatMessage, ChatHistoryEntry, DocumentUpload, MessageType};
pub use error::PersistError;
pub use trait_client::PersistenceClient;
pub use memory::InMemoryPersistenceClient;

#[cfg(feature = "mongodb")]
pub use dbs::mongo::MongoPersistenceClient;

pub mod chat;
pub mod documents;
pub mod history;
pub mod root;
pub mod topics;

use std::sync::Arc;
use lawsathi_extract::TextExtractor;
use lawsathi_persist::PersistenceClient;
use crate::assistant::Responder;
use crate::config::Config;

/// Shared application state passed to all handlers
///
/// Holds only immutable configuration and handles to the three
/// collaborators; every piece of mutable state lives in the store.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub persist: Arc<dyn PersistenceClient>,
    pub responder: Arc<dyn Responder>,
    pub extractor: Arc<dyn TextExtractor>,
}

impl AppState {
    pub fn new(
        config: Config,
        persist: Arc<dyn PersistenceClient>,
        responder: Arc<dyn Responder>,
        extractor: Arc<dyn TextExtractor>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            persist,
            responder,
            extractor,
        }
    }
}

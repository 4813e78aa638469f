#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use serde_json::Value;

use lawsathi_api::assistant::Responder;
use lawsathi_api::config::Config;
use lawsathi_api::state::AppState;
use lawsathi_api::build_router;
use lawsathi_extract::{DocumentKind, ExtractError, TextExtractor};
use lawsathi_persist::{
    ChatHistoryEntry, ChatMessage, DocumentUpload, InMemoryPersistenceClient, PersistError,
    PersistenceClient,
};

pub const CANNED_ANSWER: &str = "Aapko soochna ka adhikar hai.";
pub const BOUNDARY: &str = "lawsathi-test-boundary";

/// Responder that records every prompt and returns a canned answer
#[derive(Default)]
pub struct RecordingResponder {
    pub prompts: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl Responder for RecordingResponder {
    async fn respond(&self, prompt: &str, session_id: &str) -> anyhow::Result<String> {
        self.prompts
            .lock()
            .unwrap()
            .push((prompt.to_string(), session_id.to_string()));
        Ok(CANNED_ANSWER.to_string())
    }
}

pub struct FailingResponder;

#[async_trait]
impl Responder for FailingResponder {
    async fn respond(&self, _prompt: &str, _session_id: &str) -> anyhow::Result<String> {
        anyhow::bail!("model unavailable")
    }
}

/// Extractor returning a fixed outcome regardless of input
pub enum FixedExtractor {
    Text(String),
    PdfFailure,
}

#[async_trait]
impl TextExtractor for FixedExtractor {
    async fn extract_text(&self, _data: &[u8], _kind: DocumentKind) -> Result<String, ExtractError> {
        match self {
            Self::Text(text) => Ok(text.clone()),
            Self::PdfFailure => Err(ExtractError::Pdf("trailer not found".to_string())),
        }
    }
}

/// Store whose every operation fails
pub struct UnavailableStore;

#[async_trait]
impl PersistenceClient for UnavailableStore {
    async fn save_chat_message(&self, _message: ChatMessage) -> Result<(), PersistError> {
        Err(PersistError::Internal("connection reset".to_string()))
    }

    async fn save_document(&self, _document: DocumentUpload) -> Result<(), PersistError> {
        Err(PersistError::Internal("connection reset".to_string()))
    }

    async fn get_chat_history(
        &self,
        _session_id: &str,
        _limit: i64,
    ) -> Result<Vec<ChatHistoryEntry>, PersistError> {
        Err(PersistError::Internal("connection reset".to_string()))
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryPersistenceClient>,
    pub responder: Arc<RecordingResponder>,
}

pub fn test_app(extractor: FixedExtractor) -> TestApp {
    let store = Arc::new(InMemoryPersistenceClient::new());
    let responder = Arc::new(RecordingResponder::default());

    let state = AppState::new(
        Config::default(),
        store.clone(),
        responder.clone(),
        Arc::new(extractor),
    );

    TestApp {
        router: build_router(Arc::new(state)),
        store,
        responder,
    }
}

pub fn app_with(
    config: Config,
    persist: Arc<dyn PersistenceClient>,
    responder: Arc<dyn Responder>,
    extractor: Arc<dyn TextExtractor>,
) -> Router {
    build_router(Arc::new(AppState::new(config, persist, responder, extractor)))
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub struct FilePart<'a> {
    pub filename: &'a str,
    pub content_type: &'a str,
    pub data: &'a [u8],
}

pub fn upload_request(
    file: Option<FilePart<'_>>,
    session_id: Option<&str>,
    language: Option<&str>,
) -> Request<Body> {
    let mut body: Vec<u8> = Vec::new();

    if let Some(file) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                file.filename, file.content_type
            )
            .as_bytes(),
        );
        body.extend_from_slice(file.data);
        body.extend_from_slice(b"\r\n");
    }

    for (name, value) in [("session_id", session_id), ("language", language)] {
        if let Some(value) = value {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/api/upload-document")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

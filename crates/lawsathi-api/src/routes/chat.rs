use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use lawsathi_persist::{ChatMessage, MessageType};
use crate::{
    assistant::ask_legal_assistant,
    error::{ApiError, ApiResult},
    prompts::{Language, CHAT_SOURCES},
    state::AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatRequest {
    pub message: String,
    /// Omit to start a new session
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    #[schema(value_type = String, example = "english")]
    pub language: Language,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    pub response: String,
    pub session_id: String,
    pub timestamp: DateTime<Utc>,
    pub sources: Vec<String>,
}

/// Answer a legal question
#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Assistant answer", body = ChatResponse),
        (status = 422, description = "Request body does not match the schema"),
        (status = 500, description = "Answer could not be stored")
    ),
    tag = "chat"
)]
#[tracing::instrument(skip(state, payload), fields(session_id))]
pub async fn chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> ApiResult<Json<ChatResponse>> {
    let Json(req) = payload?;

    // An empty id starts a new session like a missing one
    let session_id = req
        .session_id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    tracing::Span::current().record("session_id", session_id.as_str());

    let answer = ask_legal_assistant(
        state.responder.as_ref(),
        &req.message,
        &session_id,
        req.language,
    )
    .await;

    // Store the user's own words, not the language-prefixed prompt
    let record = ChatMessage::new(&session_id, req.message, answer.clone(), MessageType::Text);
    state.persist.save_chat_message(record).await.map_err(|e| {
        tracing::error!(error = %e, "Chat endpoint error");
        ApiError::Internal("Failed to process chat request".to_string())
    })?;

    Ok(Json(ChatResponse {
        response: answer,
        session_id,
        timestamp: Utc::now(),
        sources: CHAT_SOURCES.iter().map(|s| s.to_string()).collect(),
    }))
}

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use lawsathi_persist::ChatHistoryEntry;
use crate::{error::{ApiError, ApiResult}, state::AppState};

/// Most records returned for one session
pub const HISTORY_LIMIT: i64 = 100;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HistoryMessage {
    pub id: String,
    pub session_id: String,
    pub message: String,
    pub response: String,
    pub timestamp: Option<DateTime<Utc>>,
    pub message_type: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatHistoryResponse {
    pub messages: Vec<HistoryMessage>,
}

/// Chat history for a session, oldest first
#[utoipa::path(
    get,
    path = "/api/chat-history/{session_id}",
    params(
        ("session_id" = String, Path, description = "Session identifier")
    ),
    responses(
        (status = 200, description = "Session messages (empty for unknown sessions)", body = ChatHistoryResponse),
        (status = 500, description = "Store unavailable")
    ),
    tag = "chat"
)]
pub async fn get_chat_history(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> ApiResult<Json<ChatHistoryResponse>> {
    let entries = state
        .persist
        .get_chat_history(&session_id, HISTORY_LIMIT)
        .await
        .map_err(|e| ApiError::Internal(format!("Failed to retrieve chat history: {}", e)))?;

    Ok(Json(ChatHistoryResponse {
        messages: entries.into_iter().map(entry_to_response).collect(),
    }))
}

fn entry_to_response(entry: ChatHistoryEntry) -> HistoryMessage {
    HistoryMessage {
        id: entry.id,
        session_id: entry.session_id,
        message: entry.message,
        response: entry.response,
        timestamp: entry.timestamp,
        message_type: entry.message_type.as_str().to_string(),
    }
}

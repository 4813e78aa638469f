use axum::{
    extract::{multipart::MultipartError, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lawsathi_extract::ExtractError;
use lawsathi_persist::PersistError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Invalid upload: {0}")]
    Multipart(#[from] MultipartError),

    /// Keeps axum's status (400 syntax, 415 content type, 422 shape)
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Persistence error: {0}")]
    Persist(#[from] PersistError),

    /// Server-side failure; the message is shown to the client as-is
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(ref msg) => {
                tracing::warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            ApiError::Multipart(ref e) => {
                tracing::warn!("Multipart error: {}", e);
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            ApiError::InvalidBody(ref rejection) => {
                tracing::warn!("Invalid request body: {}", rejection);
                (rejection.status(), rejection.body_text())
            }
            ApiError::Extraction(ref e) => {
                tracing::error!("Extraction error: {}", e);
                let message = match e {
                    ExtractError::UnsupportedContentType(_) => {
                        "Only PDF and image files are supported"
                    }
                    ExtractError::Pdf(_) => "Failed to extract text from PDF",
                    ExtractError::Image(_) => "Failed to extract text from image",
                };
                (StatusCode::BAD_REQUEST, message.to_string())
            }
            ApiError::Persist(ref e) => {
                tracing::error!("Persistence error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Storage error".to_string())
            }
            ApiError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_status() {
        let response = ApiError::BadRequest("Test error".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_extraction_failures_are_client_errors() {
        let response = ApiError::from(ExtractError::Pdf("broken xref".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_persist_failures_are_server_errors() {
        let response =
            ApiError::from(PersistError::Internal("disk full".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

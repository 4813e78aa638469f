use axum::{
    body::Bytes,
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use lawsathi_extract::DocumentKind;
use lawsathi_persist::{ChatMessage, DocumentUpload, MessageType};
use crate::{
    assistant::ask_legal_assistant,
    error::{ApiError, ApiResult},
    prompts::{document_explanation_prompt, truncate_preview, Language, PREVIEW_CHARS},
    state::AppState,
};

/// Multipart fields accepted by the upload endpoint (schema only)
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadDocumentForm {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
    pub session_id: String,
    #[schema(example = "english")]
    pub language: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadDocumentResponse {
    pub message: String,
    /// First 500 characters of the extracted text, with `...` when cut
    pub extracted_text: String,
    pub explanation: String,
    pub session_id: String,
}

struct UploadedFile {
    filename: String,
    content_type: Option<String>,
    data: Bytes,
}

#[derive(Default)]
struct UploadForm {
    file: Option<UploadedFile>,
    session_id: Option<String>,
    language: Language,
}

async fn read_form(mut multipart: Multipart) -> ApiResult<UploadForm> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().unwrap_or("unknown").to_string();
                let content_type = field.content_type().map(str::to_string);
                let data = field.bytes().await?;
                form.file = Some(UploadedFile {
                    filename,
                    content_type,
                    data,
                });
            }
            Some("session_id") => form.session_id = Some(field.text().await?),
            Some("language") => form.language = Language::from(field.text().await?),
            other => tracing::debug!(field = ?other, "Ignoring unexpected form field"),
        }
    }

    Ok(form)
}

/// Extract, explain, and store an uploaded legal document
#[utoipa::path(
    post,
    path = "/api/upload-document",
    request_body(content = UploadDocumentForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Document explained", body = UploadDocumentResponse),
        (status = 400, description = "Unsupported file type or no extractable text"),
        (status = 500, description = "Document could not be processed")
    ),
    tag = "documents"
)]
#[tracing::instrument(skip(state, multipart))]
pub async fn upload_document(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> ApiResult<Json<UploadDocumentResponse>> {
    let form = read_form(multipart).await?;

    let file = form
        .file
        .ok_or_else(|| ApiError::BadRequest("No file uploaded".to_string()))?;
    let session_id = form
        .session_id
        .ok_or_else(|| ApiError::BadRequest("session_id is required".to_string()))?;

    let kind = file
        .content_type
        .as_deref()
        .and_then(DocumentKind::from_mime)
        .ok_or_else(|| {
            ApiError::BadRequest("Only PDF and image files are supported".to_string())
        })?;

    tracing::info!(
        filename = %file.filename,
        content_type = %kind,
        bytes = file.data.len(),
        session_id = %session_id,
        "Processing document upload"
    );

    let extracted_text = state.extractor.extract_text(&file.data, kind).await?;

    if extracted_text.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "No text could be extracted from the document".to_string(),
        ));
    }

    let prompt = document_explanation_prompt(&extracted_text, form.language);
    let explanation =
        ask_legal_assistant(state.responder.as_ref(), &prompt, &session_id, form.language).await;

    let preview = truncate_preview(&extracted_text, PREVIEW_CHARS);

    let document = DocumentUpload::new(
        &session_id,
        file.filename.clone(),
        extracted_text,
        explanation.clone(),
    );
    let chat_record = ChatMessage::new(
        &session_id,
        format!("Uploaded document: {}", file.filename),
        explanation.clone(),
        MessageType::Document,
    );

    let stored = async {
        state.persist.save_document(document).await?;
        state.persist.save_chat_message(chat_record).await
    }
    .await;

    if let Err(e) = stored {
        tracing::error!(error = %e, "Document upload error");
        return Err(ApiError::Internal("Failed to process document".to_string()));
    }

    Ok(Json(UploadDocumentResponse {
        message: "Document processed successfully".to_string(),
        extracted_text: preview,
        explanation,
        session_id,
    }))
}

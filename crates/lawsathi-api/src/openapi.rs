use utoipa::OpenApi;

use crate::routes::{chat, documents, history, root, topics};

/// OpenAPI document served at `/api/openapi.json`
#[derive(OpenApi)]
#[openapi(
    info(
        title = "LawSathi API",
        description = "Legal Assistant for Rural Communities"
    ),
    paths(
        root::root,
        chat::chat,
        documents::upload_document,
        history::get_chat_history,
        topics::popular_topics,
    ),
    components(schemas(
        root::RootResponse,
        chat::ChatRequest,
        chat::ChatResponse,
        documents::UploadDocumentForm,
        documents::UploadDocumentResponse,
        history::HistoryMessage,
        history::ChatHistoryResponse,
        topics::TopicCategory,
        topics::PopularTopicsResponse,
    )),
    tags(
        (name = "health", description = "Service status"),
        (name = "chat", description = "Legal questions and history"),
        (name = "documents", description = "Document explanation"),
        (name = "topics", description = "Suggested questions")
    )
)]
pub struct ApiDoc;

pub mod assistant;
pub mod config;
pub mod error;
pub mod middleware;
pub mod openapi;
pub mod prompts;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    config::Config,
    middleware::logging,
    openapi::ApiDoc,
    routes::{chat, documents, history, root, topics},
    state::AppState,
};

/// Every route lives under this prefix
pub const API_PREFIX: &str = "/api";

pub fn build_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/", get(root::root))
        .route("/chat", post(chat::chat))
        // Uploads are read fully into memory with no size cap at this layer
        .route(
            "/upload-document",
            post(documents::upload_document).layer(DefaultBodyLimit::disable()),
        )
        .route("/chat-history/:session_id", get(history::get_chat_history))
        .route("/popular-topics", get(topics::popular_topics))
        .route("/openapi.json", get(|| async { Json(ApiDoc::openapi()) }));

    // A nested "/" only matches the bare prefix
    Router::new()
        .route(&format!("{}/", API_PREFIX), get(root::root))
        .nest(API_PREFIX, api_routes)
        .layer(axum::middleware::from_fn(logging::log_request))
        .layer(CompressionLayer::new())
        .layer(build_cors_layer(&state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Wildcard origins cannot carry credentials, so only an explicit
/// allow-list sends `Access-Control-Allow-Credentials`
fn build_cors_layer(config: &Config) -> CorsLayer {
    let origins = config.cors.allowed_origins();
    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(parsed))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

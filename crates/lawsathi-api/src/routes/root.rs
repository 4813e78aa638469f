use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
}

/// Service banner, doubles as a liveness check
#[utoipa::path(
    get,
    path = "/api/",
    responses(
        (status = 200, description = "Service is up", body = RootResponse)
    ),
    tag = "health"
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "LawSathi API - Legal Assistant for Rural Communities".to_string(),
    })
}

//! API key management endpoints

use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::router::StaticFiles;
use super::state::AppState;
use super::types::ApiError;
use crate::domain::ApiKey;

/// Confirmation body for a successful delete
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Create the `/api` router
///
/// A GET on a per-key path is a page load, not an API call, so it gets the
/// same static content as any other unmatched GET.
pub fn create_keys_router(static_files: StaticFiles) -> Router<AppState> {
    Router::new()
        .route("/keys", post(create_api_key))
        .route("/keys", get(list_api_keys))
        .route(
            "/keys/{key}/regenerate",
            post(regenerate_api_key).get_service(static_files.clone()),
        )
        .route(
            "/keys/{key}",
            delete(delete_api_key).get_service(static_files),
        )
}

/// POST /api/keys
pub async fn create_api_key(State(state): State<AppState>) -> Result<Json<ApiKey>, ApiError> {
    debug!("Received request to generate a new API key");

    let created = state.api_key_service.create().await?;

    Ok(Json(created))
}

/// GET /api/keys
pub async fn list_api_keys(State(state): State<AppState>) -> Result<Json<Vec<ApiKey>>, ApiError> {
    debug!("Received request to fetch all API keys");

    let keys = state.api_key_service.list().await?;

    Ok(Json(keys))
}

/// POST /api/keys/:key/regenerate
pub async fn regenerate_api_key(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<ApiKey>, ApiError> {
    debug!("Received request to regenerate an API key");

    let updated = state.api_key_service.regenerate(&key).await?;

    Ok(Json(updated))
}

/// DELETE /api/keys/:key
pub async fn delete_api_key(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    debug!("Received request to delete an API key");

    state.api_key_service.delete(&key).await?;

    Ok(Json(MessageResponse {
        message: "API key deleted successfully.".to_string(),
    }))
}

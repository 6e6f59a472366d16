use axum::{body::Body, http::Request, middleware, routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use super::health;
use super::keys;
use super::middleware::{logging_middleware, request_path_label, security_headers_middleware};
use super::state::AppState;
use crate::config::KeysConfig;

/// Public directory with the landing page as its fallback
pub type StaticFiles = ServeDir<ServeFile>;

/// Create the full router with application state.
///
/// Requests that match no route are served from the public directory, and
/// anything that is not a file there gets the landing page.
pub fn create_router(state: AppState, config: &KeysConfig) -> Router {
    let static_files =
        ServeDir::new(&config.public_dir).fallback(ServeFile::new(config.landing_page_path()));

    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
        tracing::debug_span!(
            "request",
            method = %request.method(),
            path = %request_path_label(request),
        )
    });

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", keys::create_keys_router(static_files.clone()))
        .fallback_service(static_files)
        .with_state(state)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(CorsLayer::permissive())
        .layer(trace)
}

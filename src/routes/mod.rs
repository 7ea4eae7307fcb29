//! Route handlers and router assembly

pub mod pages;
pub mod rooms;
pub mod setup;

use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};
use tower_http::services::ServeDir;

use crate::error::AppError;
use crate::AppState;

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(rooms::home))
        .route(
            "/availability",
            get(rooms::availability_form).post(rooms::availability_quote),
        )
        .route("/setup", get(setup::setup))
        .route("/gallery", get(pages::gallery))
        .route("/contact", get(pages::contact))
        .route("/corporate", get(pages::corporate))
        .route("/healthz", get(health))
        .nest_service("/static", ServeDir::new("static"))
        .fallback(not_found)
        .with_state(state)
}

/// Health endpoint with cache stats
async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "cache": state.cache.stats(),
    }))
}

async fn not_found() -> AppError {
    AppError::NotFound
}

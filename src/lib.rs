//! Real-estate chat backend: a static property catalog behind a chat
//! endpoint that turns free-text messages into listing recommendations,
//! delegating to an external AI process when one is configured.

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod adapter;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod error;
pub mod extractor;
pub mod intent;
pub mod models;
pub mod properties;
pub mod recommend;
pub mod session;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<adapter::ChatService>,
}

/// Build the full application router.
pub fn app(config: &config::AppConfig) -> Router {
    let state = AppState {
        service: Arc::new(adapter::ChatService::from_config(config)),
    };

    Router::new()
        .route("/", get(|| async { "Property Chat API" }))
        .route("/api/chat", post(chat::chat))
        .route("/properties", get(properties::get_properties))
        .route("/properties/:id", get(properties::get_property))
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

//! Serverless message service
//!
//! Accepts text messages over HTTP and stores them in PostgreSQL (or SQLite)
//! when a database was reachable at startup, otherwise in process memory.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod handlers;
pub mod storage;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use storage::StorageFacade;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<StorageFacade>,
}

impl AppState {
    pub fn new(storage: StorageFacade) -> Self {
        Self {
            storage: Arc::new(storage),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health))
        .route("/echo", post(handlers::echo))
        .route("/save", post(handlers::messages::save))
        .route("/messages", get(handlers::messages::list))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

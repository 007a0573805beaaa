//! Health handler

use crate::AppState;
use axum::{extract::State, http::StatusCode};

pub async fn health(State(state): State<AppState>) -> (StatusCode, String) {
    let status = state.storage.mode().connection_status();
    (
        StatusCode::OK,
        format!("🚀 Hello, Serverless! Database: {}\n", status),
    )
}

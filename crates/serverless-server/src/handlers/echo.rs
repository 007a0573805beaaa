//! Echo handler

use crate::AppState;
use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;
use serverless_types::EchoResponse;

/// Returns the request body as parsed JSON. A missing or malformed body is
/// echoed back as null rather than rejected.
pub async fn echo(State(state): State<AppState>, body: Bytes) -> Json<EchoResponse> {
    let you_sent = serde_json::from_slice::<Value>(&body).unwrap_or(Value::Null);
    // Both drivers are always linked in, so report whether a database is
    // actually bound rather than whether a driver exists.
    let database = if state.storage.is_durable() {
        "available"
    } else {
        "unavailable"
    };

    Json(EchoResponse {
        status: "received".to_string(),
        you_sent,
        database: database.to_string(),
    })
}

//! Message handlers

use crate::error::ApiError;
use crate::storage::DEFAULT_LIST_LIMIT;
use crate::AppState;
use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;
use serverless_types::{ListResponse, SaveResponse};

const NO_DATABASE_NOTE: &str = "Database not available";
const MEMORY_LISTING_NOTE: &str = "Database not available - using temporary storage";

pub async fn save(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SaveResponse>, ApiError> {
    let data = parse_body(&body).ok_or(ApiError::BadRequest("No JSON data"))?;

    let message = data
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or_default();

    let saved = state.storage.save(message).await?;

    let response = if saved.mode.is_durable() {
        SaveResponse {
            status: "saved to database".to_string(),
            message: saved.content,
            storage: saved.mode.label().to_string(),
            note: None,
        }
    } else {
        SaveResponse {
            status: "saved to memory".to_string(),
            message: saved.content,
            storage: saved.mode.label().to_string(),
            note: Some(NO_DATABASE_NOTE.to_string()),
        }
    };

    Ok(Json(response))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<ListResponse>, ApiError> {
    let messages = state.storage.list(DEFAULT_LIST_LIMIT).await?;

    let (status, note) = if state.storage.is_durable() {
        ("from database", None)
    } else {
        ("from memory", Some(MEMORY_LISTING_NOTE.to_string()))
    };

    Ok(Json(ListResponse {
        status: status.to_string(),
        count: messages.count(),
        messages,
        note,
    }))
}

/// Parsed JSON body, or `None` when it is absent, malformed or empty-valued
/// (`{}`, `[]`, `""`, `0`, `false`, `null`).
fn parse_body(body: &[u8]) -> Option<Value> {
    serde_json::from_slice::<Value>(body)
        .ok()
        .filter(is_truthy)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_body_rejects_empty_values() {
        assert!(parse_body(b"").is_none());
        assert!(parse_body(b"not json").is_none());
        assert!(parse_body(b"{}").is_none());
        assert!(parse_body(b"[]").is_none());
        assert!(parse_body(b"null").is_none());
        assert!(parse_body(b"false").is_none());
        assert!(parse_body(b"0").is_none());
    }

    #[test]
    fn test_parse_body_accepts_objects() {
        assert_eq!(
            parse_body(br#"{"message":"hi"}"#),
            Some(json!({ "message": "hi" }))
        );
        assert_eq!(parse_body(br#"{"other":1}"#), Some(json!({ "other": 1 })));
    }
}

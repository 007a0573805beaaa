//! HTTP response bodies

use crate::MessageList;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
pub struct EchoResponse {
    pub status: String,
    /// The parsed request body, or null when it was absent or malformed.
    pub you_sent: Value,
    pub database: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SaveResponse {
    pub status: String,
    pub message: String,
    pub storage: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
    pub status: String,
    pub count: usize,
    pub messages: MessageList,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

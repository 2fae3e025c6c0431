//! Request and response bodies for the backend API.
//!
//! Shapes follow what the server returns; fields the client does not rely
//! on are optional so newer server versions keep decoding. Bodies are
//! returned to callers verbatim, with no value validation in this layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body for `POST /api/auth/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub student_id: String,
    pub name: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Result of a registration.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisteredUser {
    pub student_id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Result of a login: the bearer credential plus identity fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub student_id: String,
    pub name: String,
}

/// Record returned by `GET /api/auth/me`.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentUser {
    pub student_id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Reply to a sent chat message.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    pub reply: String,
    #[serde(default)]
    pub case_id: Option<String>,
}

/// One turn of a stored chat history, oldest first.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

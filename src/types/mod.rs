use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============= API Request/Response Types =============

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatRequest {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    pub response: String,
    pub session_id: String,
    pub sources: Vec<Source>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct Source {
    pub id: String,
    pub text: String,
    pub relevance_score: f32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TranscriptResponse {
    pub session_id: String,
    pub messages: Vec<Message>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct InstructionsResponse {
    pub english: Vec<String>,
    pub gujarati: Vec<String>,
}

// ============= Conversation Types =============

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

// ============= Retrieval Types =============

/// A single nearest-neighbor result from the vector index.
///
/// `text` is the `text` metadata field of the stored vector and defaults to
/// the empty string when the index returns no such field. Ephemeral: produced
/// per query and discarded once the context string is assembled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalMatch {
    pub id: String,
    pub text: String,
    pub score: f32,
}

/// A generated answer together with the matches that grounded it.
#[derive(Debug, Clone)]
pub struct Answer {
    pub text: String,
    pub matches: Vec<RetrievalMatch>,
}

// ============= Error Types =============

/// Application error taxonomy.
///
/// Each remote stage gets its own variant so "which upstream is unavailable"
/// survives to the caller. An empty retrieval result is not an error.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Embedding service error: {0}")]
    Embedding(String),

    #[error("Vector index error: {0}")]
    Index(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;

        let (status, message) = match self {
            AppError::Embedding(msg) => (StatusCode::BAD_GATEWAY, msg),
            AppError::Index(msg) => (StatusCode::BAD_GATEWAY, msg),
            AppError::Generation(msg) => (StatusCode::BAD_GATEWAY, msg),
            AppError::Configuration(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

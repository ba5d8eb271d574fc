//! HTTP API Handlers and Routes
//!
//! The REST surface for K.A.R.A, built on the Axum web framework.
//!
//! # API Endpoints
//!
//! ## Chat (`/api/chat`)
//! - `POST /api/chat` - Ask a question; runs the full RAG pipeline
//!
//! ## Conversations (`/api/conversations`)
//! - `GET /api/conversations/{id}` - Get a session's transcript
//!
//! ## System
//! - `GET /api/instructions` - Bilingual usage instructions
//! - `GET /api/health` - Health check endpoint
//!
//! Sessions are in-memory only: a transcript lives as long as the server
//! process and is never persisted.

/// Request and response handlers for all API endpoints.
pub mod handlers;
/// Router configuration and route definitions.
pub mod routes;

use utoipa::OpenApi;

/// OpenAPI documentation for the REST surface.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::chat::chat,
        handlers::chat::get_transcript,
        handlers::system::instructions,
        handlers::system::health,
    ),
    components(schemas(
        crate::types::ChatRequest,
        crate::types::ChatResponse,
        crate::types::Source,
        crate::types::TranscriptResponse,
        crate::types::InstructionsResponse,
        crate::types::Message,
        crate::types::MessageRole,
    )),
    tags(
        (name = "chat", description = "Question answering over the tax-law index"),
        (name = "system", description = "Health and usage information")
    )
)]
pub struct ApiDoc;

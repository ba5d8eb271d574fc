use crate::{
    AppState,
    types::{AppError, ChatRequest, ChatResponse, Result, Source, TranscriptResponse},
};
use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

/// Ask a tax-law question.
///
/// Runs the full pipeline for one turn: embed the question, retrieve the
/// top-k passages, generate a Gujarati answer. A new session is created when
/// no `session_id` is supplied; passing one back continues that conversation.
#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Generated answer", body = ChatResponse),
        (status = 400, description = "Invalid input"),
        (status = 502, description = "Embedding, index, or generation service failed")
    ),
    tag = "chat"
)]
pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    if payload.message.trim().is_empty() {
        return Err(AppError::InvalidInput("Message must not be empty".to_string()));
    }

    let session_id = payload
        .session_id
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let transcript = state.sessions.get_or_create(&session_id);
    let mut transcript = transcript.lock().await;

    let answer = state
        .pipeline
        .chat_turn(&mut transcript, &payload.message)
        .await?;

    let sources = answer
        .matches
        .iter()
        .map(|m| Source {
            id: m.id.clone(),
            text: m.text.clone(),
            relevance_score: m.score,
        })
        .collect();

    Ok(Json(ChatResponse {
        response: answer.text,
        session_id,
        sources,
    }))
}

/// Get the transcript of a session.
#[utoipa::path(
    get,
    path = "/api/conversations/{id}",
    params(("id" = String, Path, description = "Session id")),
    responses(
        (status = 200, description = "Session transcript", body = TranscriptResponse),
        (status = 404, description = "Unknown session")
    ),
    tag = "chat"
)]
pub async fn get_transcript(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TranscriptResponse>> {
    let transcript = state
        .sessions
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("Session '{}' not found", id)))?;

    let messages = transcript.lock().await.messages().to_vec();

    Ok(Json(TranscriptResponse {
        session_id: id,
        messages,
    }))
}

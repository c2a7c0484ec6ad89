//! The chat turn endpoint.
//!
//! POST /api/v1/chat
//!
//! One user submission per request: resolves (or creates) the session,
//! forwards the message through the conversation client, and returns the
//! assistant reply. The call blocks until the provider responds or errors;
//! provider failures surface as a normal assistant message, never as an
//! HTTP error, so the session stays usable.

use std::time::Instant;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use campus_types::chat::ChatMessage;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Request body for the chat endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Existing session to continue; if absent, a new session is created.
    pub session_id: Option<Uuid>,
    /// The user message to forward.
    pub message: String,
}

/// Response payload: the session id plus the assistant's reply message.
#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub session_id: Uuid,
    pub reply: ChatMessage,
}

/// POST /api/v1/chat - process one user turn.
pub async fn send_message(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<ApiResponse<ChatReply>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    if body.message.trim().is_empty() {
        return Err(AppError::Validation("message must not be empty".to_string()));
    }

    let session = match body.session_id {
        Some(id) => state.sessions.get_or_create(id),
        None => state.sessions.create(),
    };

    // The per-session mutex serializes turns: no parallel in-flight
    // provider calls for one session.
    let mut session = session.lock().await;
    let reply = state.chat_service.send(&mut session, &body.message).await;

    let payload = ChatReply {
        session_id: session.id,
        reply,
    };

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(ApiResponse::success(payload, request_id, elapsed))
}

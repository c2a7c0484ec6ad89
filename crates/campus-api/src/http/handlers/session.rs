//! Session CRUD HTTP handlers.
//!
//! Endpoints:
//! - POST   /api/v1/sessions               - Create an empty session
//! - GET    /api/v1/sessions/{id}          - Get a session summary
//! - GET    /api/v1/sessions/{id}/messages - Get the transcript
//! - DELETE /api/v1/sessions/{id}          - Drop a session

use std::time::Instant;

use axum::extract::{Path, State};
use uuid::Uuid;

use campus_types::chat::{ChatMessage, SessionSummary};
use campus_types::error::SessionError;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Parse a UUID from a path parameter, returning a 400 error on invalid format.
fn parse_uuid(s: &str) -> Result<Uuid, AppError> {
    s.parse::<Uuid>()
        .map_err(|_| AppError::Session(SessionError::InvalidId(s.to_string())))
}

/// POST /api/v1/sessions - create an empty session.
pub async fn create_session(State(state): State<AppState>) -> ApiResponse<SessionSummary> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let session = state.sessions.create();
    let summary = session.lock().await.summary();

    let elapsed = start.elapsed().as_millis() as u64;
    ApiResponse::success(summary, request_id, elapsed)
}

/// GET /api/v1/sessions/{id} - session summary.
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<ApiResponse<SessionSummary>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let sid = parse_uuid(&session_id)?;
    let session = state
        .sessions
        .get(&sid)
        .ok_or(AppError::Session(SessionError::NotFound))?;

    let summary = session.lock().await.summary();

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(ApiResponse::success(summary, request_id, elapsed))
}

/// GET /api/v1/sessions/{id}/messages - the transcript in arrival order.
pub async fn get_messages(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<ApiResponse<Vec<ChatMessage>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let sid = parse_uuid(&session_id)?;
    let session = state
        .sessions
        .get(&sid)
        .ok_or(AppError::Session(SessionError::NotFound))?;

    let transcript = session.lock().await.transcript.clone();

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(ApiResponse::success(transcript, request_id, elapsed))
}

/// DELETE /api/v1/sessions/{id} - drop a session and its transcript.
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<ApiResponse<serde_json::Value>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let sid = parse_uuid(&session_id)?;
    if !state.sessions.remove(&sid) {
        return Err(AppError::Session(SessionError::NotFound));
    }

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(ApiResponse::success(
        serde_json::json!({"deleted": true}),
        request_id,
        elapsed,
    ))
}

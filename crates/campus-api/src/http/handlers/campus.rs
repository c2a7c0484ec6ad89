//! Campus info endpoint.
//!
//! GET /api/v1/campus
//!
//! Serves the structured campus facts (mess menu, events, locations,
//! support contacts) for the SPA's informational panels. Same data the
//! assistant is primed with, so the panels and the chat never disagree.

use std::time::Instant;

use axum::extract::State;
use uuid::Uuid;

use campus_core::campus::CampusInfo;

use crate::http::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/campus - the campus fact panels.
pub async fn get_campus_info(State(state): State<AppState>) -> ApiResponse<CampusInfo> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let info = (*state.campus).clone();

    let elapsed = start.elapsed().as_millis() as u64;
    ApiResponse::success(info, request_id, elapsed)
}

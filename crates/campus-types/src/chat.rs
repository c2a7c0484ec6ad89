//! Chat transcript types for CampusConnect.
//!
//! A transcript is the ordered, append-only list of messages displayed to
//! one user session. Messages are immutable once created; insertion order
//! is display order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export MessageRole from the llm module (used in both contexts).
pub use crate::llm::MessageRole;

/// A single displayed message within a session transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a new message stamped with the current time.
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            role,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// Summary view of a session (returned by the session endpoints; the full
/// transcript has its own endpoint).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    pub message_count: usize,
    /// Whether the session has been primed with the system context.
    pub primed: bool,
}

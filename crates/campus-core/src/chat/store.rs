//! In-memory Session Store.
//!
//! An explicit keyed store: a concurrent map from session id to session
//! state, replacing the ambient framework-managed state of a typical web
//! session mechanism. Sessions are created on first interaction and live
//! until explicitly removed -- no expiry, no persistence across restarts.
//!
//! Each session sits behind its own `tokio::sync::Mutex`, which serializes
//! turns within a session (no parallel in-flight provider calls per
//! session) while leaving sessions fully isolated from one another.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

use campus_types::chat::{ChatMessage, MessageRole, SessionSummary};
use campus_types::llm::ConversationHandle;

/// A session handle shared between the store and in-flight requests.
pub type SharedSession = Arc<Mutex<Session>>;

/// Per-session state: the displayed transcript plus the handle to an
/// ongoing primed conversation.
#[derive(Debug)]
pub struct Session {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    /// Ordered, append-only transcript. Insertion order is display order.
    pub transcript: Vec<ChatMessage>,
    /// Set once the session has been primed with the system context.
    pub conversation: Option<ConversationHandle>,
}

impl Session {
    fn new(id: Uuid) -> Self {
        Self {
            id,
            started_at: Utc::now(),
            transcript: Vec::new(),
            conversation: None,
        }
    }

    /// Append a message to the transcript and return a clone of it.
    ///
    /// The transcript has no size cap; unbounded growth is an accepted
    /// limitation of the store.
    pub fn append(&mut self, role: MessageRole, content: impl Into<String>) -> ChatMessage {
        let message = ChatMessage::new(role, content);
        self.transcript.push(message.clone());
        message
    }

    /// Summary view for the session endpoints.
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            id: self.id,
            started_at: self.started_at,
            message_count: self.transcript.len(),
            primed: self.conversation.is_some(),
        }
    }
}

/// Keyed store mapping session ids to session state.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<Uuid, SharedSession>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Return the session for `id`, creating an empty one if absent.
    pub fn get_or_create(&self, id: Uuid) -> SharedSession {
        self.sessions
            .entry(id)
            .or_insert_with(|| Arc::new(Mutex::new(Session::new(id))))
            .clone()
    }

    /// Create a fresh session under a new id.
    pub fn create(&self) -> SharedSession {
        self.get_or_create(Uuid::now_v7())
    }

    /// Look up an existing session without creating one.
    pub fn get(&self, id: &Uuid) -> Option<SharedSession> {
        self.sessions.get(id).map(|entry| entry.clone())
    }

    /// Drop a session. Returns true if it existed.
    pub fn remove(&self, id: &Uuid) -> bool {
        self.sessions.remove(id).is_some()
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

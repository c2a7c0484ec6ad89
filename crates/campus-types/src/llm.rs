//! LLM conversation types for CampusConnect.
//!
//! These types model the data shapes for provider interactions: conversation
//! turns in the provider's wire vocabulary, the client-held conversation
//! handle, and provider error handling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of a message in a displayed transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(MessageRole::User),
            "assistant" => Ok(MessageRole::Assistant),
            other => Err(format!("invalid message role: '{other}'")),
        }
    }
}

/// Role of a turn on the provider wire.
///
/// The Gemini conversation contract names its two speakers `user` and
/// `model` (not `assistant`), so the wire vocabulary gets its own enum
/// rather than reusing [`MessageRole`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Model,
}

impl fmt::Display for TurnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnRole::User => write!(f, "user"),
            TurnRole::Model => write!(f, "model"),
        }
    }
}

/// A single turn in a provider conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderTurn {
    pub role: TurnRole,
    pub text: String,
}

impl ProviderTurn {
    /// A user-authored turn.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            text: text.into(),
        }
    }

    /// A model-authored turn.
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Model,
            text: text.into(),
        }
    }
}

/// Client-held handle to an active primed conversation.
///
/// The Gemini REST API is stateless, so multi-turn context lives on the
/// client: the handle is the ordered turn history sent in full on every
/// call. Invariant: the first turn is always the system context as a user
/// turn, recorded before any real user message is forwarded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationHandle {
    pub turns: Vec<ProviderTurn>,
}

impl ConversationHandle {
    /// Create a handle already primed with the system context and the
    /// provider's (discarded from display) priming reply.
    pub fn primed(system_context: impl Into<String>, priming_reply: impl Into<String>) -> Self {
        Self {
            turns: vec![
                ProviderTurn::user(system_context),
                ProviderTurn::model(priming_reply),
            ],
        }
    }

    /// Record a completed exchange: one user turn and the model's reply.
    pub fn push_exchange(&mut self, user_text: impl Into<String>, reply: impl Into<String>) {
        self.turns.push(ProviderTurn::user(user_text));
        self.turns.push(ProviderTurn::model(reply));
    }
}

/// Errors from conversation provider operations.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("rate limited")]
    RateLimited,

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("empty response from provider")]
    EmptyResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_role_roundtrip() {
        for role in [MessageRole::User, MessageRole::Assistant] {
            let s = role.to_string();
            let parsed: MessageRole = s.parse().unwrap();
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn test_message_role_serde() {
        let role = MessageRole::Assistant;
        let json = serde_json::to_string(&role).unwrap();
        assert_eq!(json, "\"assistant\"");
        let parsed: MessageRole = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, MessageRole::Assistant);
    }

    #[test]
    fn test_turn_role_serde_uses_wire_names() {
        assert_eq!(serde_json::to_string(&TurnRole::Model).unwrap(), "\"model\"");
        assert_eq!(serde_json::to_string(&TurnRole::User).unwrap(), "\"user\"");
    }

    #[test]
    fn test_primed_handle_starts_with_context() {
        let handle = ConversationHandle::primed("You are a campus assistant.", "Understood.");
        assert_eq!(handle.turns.len(), 2);
        assert_eq!(handle.turns[0].role, TurnRole::User);
        assert_eq!(handle.turns[0].text, "You are a campus assistant.");
        assert_eq!(handle.turns[1].role, TurnRole::Model);
    }

    #[test]
    fn test_push_exchange_keeps_alternation() {
        let mut handle = ConversationHandle::primed("ctx", "ok");
        handle.push_exchange("What's for lunch?", "Rajma Chawal");
        handle.push_exchange("And dinner?", "Paneer Butter Masala");

        assert_eq!(handle.turns.len(), 6);
        for (i, turn) in handle.turns.iter().enumerate() {
            let expected = if i % 2 == 0 { TurnRole::User } else { TurnRole::Model };
            assert_eq!(turn.role, expected);
        }
    }

    #[test]
    fn test_provider_error_display() {
        let err = ProviderError::Provider {
            message: "HTTP 503: overloaded".to_string(),
        };
        assert_eq!(err.to_string(), "provider error: HTTP 503: overloaded");
        assert_eq!(
            ProviderError::EmptyResponse.to_string(),
            "empty response from provider"
        );
    }
}

//! The Conversation Client: priming and per-turn forwarding.
//!
//! `ChatService` is stateless: it holds the provider and the shared system
//! context, and takes the session by reference on each call. Generic over
//! `ConversationProvider` to keep the layering clean (campus-core never
//! depends on campus-infra).

use std::sync::Arc;

use tracing::{debug, warn};

use campus_types::chat::{ChatMessage, MessageRole};
use campus_types::llm::{ConversationHandle, ProviderError, ProviderTurn};

use crate::chat::store::Session;
use crate::llm::provider::ConversationProvider;

/// Orchestrates the per-turn conversation flow against the provider.
pub struct ChatService<P: ConversationProvider> {
    provider: P,
    /// The rendered campus context; read-only and shared by all sessions.
    system_context: Arc<str>,
}

impl<P: ConversationProvider> ChatService<P> {
    pub fn new(provider: P, system_context: impl Into<Arc<str>>) -> Self {
        Self {
            provider,
            system_context: system_context.into(),
        }
    }

    /// Access the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The shared system context string.
    pub fn system_context(&self) -> &str {
        &self.system_context
    }

    /// Prime the session's conversation if it has not been primed yet.
    ///
    /// Opens a new conversation by sending the system context as the sole
    /// first turn. The priming reply is recorded in the handle (the wire
    /// history must alternate) but never appears in the transcript.
    /// Idempotent: a session that already holds a handle is left untouched.
    pub async fn ensure_primed(&self, session: &mut Session) -> Result<(), ProviderError> {
        if session.conversation.is_some() {
            return Ok(());
        }

        let priming_turn = [ProviderTurn::user(self.system_context.as_ref())];
        let reply = self.provider.complete(&priming_turn).await?;

        debug!(session_id = %session.id, provider = self.provider.name(), "session primed");
        session.conversation = Some(ConversationHandle::primed(
            self.system_context.as_ref(),
            reply,
        ));
        Ok(())
    }

    /// Process one user turn: append the user message, forward it to the
    /// provider, and append the reply.
    ///
    /// Returns the appended assistant message. Any provider error (priming
    /// included) is converted here into the synthetic assistant message
    /// `"Sorry, I encountered an error: <details>"` rather than raised
    /// further; the session stays usable for subsequent turns. Single
    /// attempt per turn -- no retry, no backoff.
    pub async fn send(&self, session: &mut Session, user_text: &str) -> ChatMessage {
        session.append(MessageRole::User, user_text);

        let content = match self.forward(session, user_text).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!(session_id = %session.id, error = %err, "provider call failed");
                format!("Sorry, I encountered an error: {err}")
            }
        };

        session.append(MessageRole::Assistant, content)
    }

    /// Prime if needed, then forward the full turn history plus the new
    /// user text. The exchange is committed to the conversation handle only
    /// on success, so the wire history never holds a user turn without its
    /// model reply.
    async fn forward(&self, session: &mut Session, user_text: &str) -> Result<String, ProviderError> {
        self.ensure_primed(session).await?;

        let handle = session
            .conversation
            .as_mut()
            .expect("ensure_primed sets the handle");

        let mut turns = handle.turns.clone();
        turns.push(ProviderTurn::user(user_text));

        let reply = self.provider.complete(&turns).await?;
        handle.push_exchange(user_text, reply.clone());
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use uuid::Uuid;

    use crate::campus::CampusInfo;
    use crate::chat::store::SessionStore;
    use campus_types::llm::TurnRole;

    /// Scripted provider: pops one outcome per call and records every
    /// turn history it was handed.
    struct ScriptedProvider {
        outcomes: Mutex<VecDeque<Result<String, ProviderError>>>,
        calls: Mutex<Vec<Vec<ProviderTurn>>>,
    }

    impl ScriptedProvider {
        fn new(outcomes: Vec<Result<String, ProviderError>>) -> Self {
            Self {
                outcomes: Mutex::new(outcomes.into()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        fn call(&self, index: usize) -> Vec<ProviderTurn> {
            self.calls.lock().unwrap()[index].clone()
        }
    }

    impl ConversationProvider for ScriptedProvider {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn complete(&self, turns: &[ProviderTurn]) -> Result<String, ProviderError> {
            self.calls.lock().unwrap().push(turns.to_vec());
            self.outcomes
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(ProviderError::EmptyResponse))
        }
    }

    fn network_error() -> ProviderError {
        ProviderError::Provider {
            message: "connection reset by peer".to_string(),
        }
    }

    async fn fresh_session(store: &SessionStore) -> SharedTestSession {
        store.get_or_create(Uuid::now_v7())
    }

    type SharedTestSession = crate::chat::store::SharedSession;

    #[tokio::test]
    async fn test_priming_happens_once() {
        let provider = ScriptedProvider::new(vec![
            Ok("Understood.".to_string()),
            Ok("Rajma Chawal, Roti, Salad".to_string()),
            Ok("Paneer Butter Masala, Jeera Rice".to_string()),
        ]);
        let service = ChatService::new(provider, "campus facts");
        let store = SessionStore::new();
        let session = fresh_session(&store).await;
        let mut session = session.lock().await;

        service.send(&mut session, "What's for lunch today?").await;
        service.send(&mut session, "And dinner?").await;

        // 1 priming call + 2 user turns
        assert_eq!(service.provider().call_count(), 3);

        // The priming call carried only the system context.
        let priming = service.provider().call(0);
        assert_eq!(priming.len(), 1);
        assert_eq!(priming[0].text, "campus facts");

        // No later call re-issues the context as its last turn; the context
        // appears exactly once, as the first turn of every call.
        for i in 1..3 {
            let call = service.provider().call(i);
            assert_eq!(call[0].text, "campus facts");
            assert_eq!(
                call.iter().filter(|t| t.text == "campus facts").count(),
                1
            );
        }
    }

    #[tokio::test]
    async fn test_lunch_scenario_appends_reply_second() {
        let provider = ScriptedProvider::new(vec![
            Ok("Got it, ready to help students!".to_string()),
            Ok("Today's lunch is Rajma Chawal, Roti, Salad.".to_string()),
        ]);
        let service = ChatService::new(provider, CampusInfo::bundled().system_context());
        let store = SessionStore::new();
        let session = fresh_session(&store).await;
        let mut session = session.lock().await;

        let reply = service.send(&mut session, "What's for lunch today?").await;

        assert!(reply.content.contains("Rajma Chawal, Roti, Salad"));
        assert_eq!(session.transcript.len(), 2);
        assert_eq!(session.transcript[0].role, MessageRole::User);
        assert_eq!(session.transcript[1].role, MessageRole::Assistant);
        assert_eq!(session.transcript[1].content, reply.content);
        // The priming reply never shows up in the transcript.
        assert!(!session
            .transcript
            .iter()
            .any(|m| m.content.contains("ready to help")));
    }

    #[tokio::test]
    async fn test_transcript_alternates_even_through_failures() {
        let provider = ScriptedProvider::new(vec![
            Ok("ok".to_string()),
            Ok("first reply".to_string()),
            Err(network_error()),
            Ok("third reply".to_string()),
        ]);
        let service = ChatService::new(provider, "ctx");
        let store = SessionStore::new();
        let session = fresh_session(&store).await;
        let mut session = session.lock().await;

        for text in ["one", "two", "three"] {
            service.send(&mut session, text).await;
        }

        // N = 3 submissions -> exactly 2N messages, strictly alternating.
        assert_eq!(session.transcript.len(), 6);
        for (i, msg) in session.transcript.iter().enumerate() {
            let expected = if i % 2 == 0 {
                MessageRole::User
            } else {
                MessageRole::Assistant
            };
            assert_eq!(msg.role, expected, "message {i}");
        }
    }

    #[tokio::test]
    async fn test_provider_failure_becomes_transcript_text() {
        let provider = ScriptedProvider::new(vec![
            Ok("ok".to_string()),
            Err(network_error()),
            Ok("back to normal".to_string()),
        ]);
        let service = ChatService::new(provider, "ctx");
        let store = SessionStore::new();
        let session = fresh_session(&store).await;
        let mut session = session.lock().await;

        let reply = service.send(&mut session, "hello?").await;
        assert_eq!(
            reply.content,
            "Sorry, I encountered an error: provider error: connection reset by peer"
        );
        assert_eq!(session.transcript[1].content, reply.content);

        // The session accepts further submissions afterward.
        let next = service.send(&mut session, "still there?").await;
        assert_eq!(next.content, "back to normal");
        assert_eq!(session.transcript.len(), 4);
    }

    #[tokio::test]
    async fn test_failed_turn_not_committed_to_handle() {
        let provider = ScriptedProvider::new(vec![
            Ok("ok".to_string()),
            Err(network_error()),
            Ok("recovered".to_string()),
        ]);
        let service = ChatService::new(provider, "ctx");
        let store = SessionStore::new();
        let session = fresh_session(&store).await;
        let mut session = session.lock().await;

        service.send(&mut session, "lost turn").await;
        // Only the priming exchange is in the handle after the failure.
        assert_eq!(session.conversation.as_ref().unwrap().turns.len(), 2);

        service.send(&mut session, "kept turn").await;
        let turns = &session.conversation.as_ref().unwrap().turns;
        assert_eq!(turns.len(), 4);
        assert_eq!(turns[2].text, "kept turn");
        assert_eq!(turns[3].role, TurnRole::Model);
    }

    #[tokio::test]
    async fn test_priming_failure_retries_next_turn() {
        let provider = ScriptedProvider::new(vec![
            Err(network_error()),
            Ok("primed now".to_string()),
            Ok("real reply".to_string()),
        ]);
        let service = ChatService::new(provider, "ctx");
        let store = SessionStore::new();
        let session = fresh_session(&store).await;
        let mut session = session.lock().await;

        let first = service.send(&mut session, "hi").await;
        assert!(first.content.starts_with("Sorry, I encountered an error:"));
        assert!(session.conversation.is_none());

        let second = service.send(&mut session, "hi again").await;
        assert_eq!(second.content, "real reply");
        assert!(session.conversation.is_some());
    }

    #[tokio::test]
    async fn test_ensure_primed_is_idempotent() {
        let provider = ScriptedProvider::new(vec![Ok("ok".to_string())]);
        let service = ChatService::new(provider, "ctx");
        let store = SessionStore::new();
        let session = fresh_session(&store).await;
        let mut session = session.lock().await;

        service.ensure_primed(&mut session).await.unwrap();
        service.ensure_primed(&mut session).await.unwrap();
        service.ensure_primed(&mut session).await.unwrap();

        assert_eq!(service.provider().call_count(), 1);
    }

    #[tokio::test]
    async fn test_two_sessions_do_not_share_state() {
        let provider = ScriptedProvider::new(vec![
            Ok("ok".to_string()),
            Ok("reply for a".to_string()),
            Ok("ok".to_string()),
            Ok("reply for b".to_string()),
        ]);
        let service = ChatService::new(provider, "ctx");
        let store = SessionStore::new();

        let a = store.create();
        let b = store.create();

        service.send(&mut *a.lock().await, "question from a").await;
        service.send(&mut *b.lock().await, "question from b").await;

        let a = a.lock().await;
        let b = b.lock().await;
        assert_eq!(a.transcript.len(), 2);
        assert_eq!(b.transcript.len(), 2);
        assert!(a.transcript.iter().all(|m| !m.content.contains("from b")));
        assert!(b.transcript.iter().all(|m| !m.content.contains("from a")));
    }
}

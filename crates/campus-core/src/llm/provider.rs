//! ConversationProvider trait definition.
//!
//! This is the abstraction the Conversation Client talks through. The
//! provider receives the full ordered turn history (system context first)
//! and returns the model's complete reply text -- the sole response unit;
//! there is no streaming mode.

use campus_types::llm::{ProviderError, ProviderTurn};

/// Trait for hosted LLM conversation backends.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition). Services are
/// generic over this trait; implementations live in campus-infra (e.g.,
/// `GeminiProvider`).
pub trait ConversationProvider: Send + Sync {
    /// Human-readable provider name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Send the full ordered turn history and receive the reply text.
    ///
    /// One attempt per call: the caller owns the no-retry policy.
    fn complete(
        &self,
        turns: &[ProviderTurn],
    ) -> impl std::future::Future<Output = Result<String, ProviderError>> + Send;
}

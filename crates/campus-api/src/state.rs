//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by the HTTP handlers.
//! The chat service is generic over the provider trait, but AppState pins
//! it to the concrete Gemini implementation.

use std::sync::Arc;

use secrecy::SecretString;

use campus_core::campus::CampusInfo;
use campus_core::chat::service::ChatService;
use campus_core::chat::store::SessionStore;
use campus_infra::llm::GeminiProvider;
use campus_types::config::ServerConfig;

/// Concrete type alias for the service generic pinned to the infra provider.
pub type ConcreteChatService = ChatService<GeminiProvider>;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
    pub sessions: Arc<SessionStore>,
    pub campus: Arc<CampusInfo>,
}

impl AppState {
    /// Wire the services: render the system context once, build the
    /// provider, and create an empty session store.
    pub fn init(api_key: SecretString, config: &ServerConfig) -> Self {
        let campus = CampusInfo::bundled();
        let system_context = campus.system_context();

        let provider = GeminiProvider::new(api_key, config.model.clone())
            .with_generation(config.max_output_tokens, config.temperature);

        Self {
            chat_service: Arc::new(ChatService::new(provider, system_context)),
            sessions: Arc::new(SessionStore::new()),
            campus: Arc::new(campus),
        }
    }

    /// Like [`init`](Self::init) but with the provider pointed at a
    /// different base URL. Used by tests.
    pub fn init_with_base_url(api_key: SecretString, config: &ServerConfig, base_url: String) -> Self {
        let campus = CampusInfo::bundled();
        let system_context = campus.system_context();

        let provider = GeminiProvider::new(api_key, config.model.clone())
            .with_generation(config.max_output_tokens, config.temperature)
            .with_base_url(base_url);

        Self {
            chat_service: Arc::new(ChatService::new(provider, system_context)),
            sessions: Arc::new(SessionStore::new()),
            campus: Arc::new(campus),
        }
    }
}

//! Session state and the conversation loop for CampusConnect.
//!
//! `store` holds the keyed in-memory Session Store; `service` is the
//! Conversation Client that primes and forwards turns to the provider.

pub mod service;
pub mod store;

pub use service::ChatService;
pub use store::{Session, SessionStore, SharedSession};

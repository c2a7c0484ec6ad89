//! Provider abstractions for CampusConnect.
//!
//! This module defines the `ConversationProvider` trait that the
//! infrastructure layer implements for the hosted LLM backend.

pub mod provider;

pub use provider::ConversationProvider;

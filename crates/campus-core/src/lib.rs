//! Business logic and provider trait definitions for CampusConnect.
//!
//! This crate defines the "ports" (the [`llm::provider::ConversationProvider`]
//! trait) that the infrastructure layer implements. It depends only on
//! `campus-types` -- never on `campus-infra` or any HTTP crate.

pub mod campus;
pub mod chat;
pub mod llm;

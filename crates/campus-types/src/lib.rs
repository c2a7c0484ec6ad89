//! Shared domain types for CampusConnect.
//!
//! This crate contains the core domain types used across the CampusConnect
//! service: chat messages, provider conversation turns, server configuration,
//! and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;

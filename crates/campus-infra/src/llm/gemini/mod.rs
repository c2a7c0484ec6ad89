//! Google Gemini LLM provider implementation.
//!
//! This module provides the [`GeminiProvider`] which implements the
//! [`ConversationProvider`](campus_core::llm::provider::ConversationProvider)
//! trait against the Gemini `generateContent` REST API.

pub mod client;
pub mod types;

pub use client::GeminiProvider;

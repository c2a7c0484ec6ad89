//! Infrastructure layer for CampusConnect.
//!
//! Contains the implementation of the provider trait defined in
//! `campus-core` (the Gemini HTTP client), environment credential
//! resolution, and the config file loader.

pub mod config;
pub mod llm;
pub mod secret;

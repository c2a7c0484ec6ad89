//! Credential resolution for CampusConnect.
//!
//! The service has exactly one secret: the Generative Language API key,
//! read from the environment at startup. Absence is fatal before any
//! listener binds.

pub mod env;

pub use env::{resolve_api_key, API_KEY_VAR};

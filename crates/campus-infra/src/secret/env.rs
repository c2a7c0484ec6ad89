//! Environment variable credential resolution.
//!
//! Read-only: the key is set via shell config or the process supervisor,
//! never written by the service. The value is wrapped in
//! [`secrecy::SecretString`] immediately so it cannot leak through Debug
//! output or logs.

use secrecy::SecretString;

use campus_types::error::SecretError;

/// The environment variable holding the Generative Language API key.
pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";

/// Resolve the API key from [`API_KEY_VAR`].
///
/// A missing or empty variable is a startup configuration error: the
/// caller halts with a user-visible message and no chat functionality is
/// reachable.
pub fn resolve_api_key() -> Result<SecretString, SecretError> {
    resolve_var(API_KEY_VAR)
}

/// Resolve an arbitrary environment variable into a secret.
pub fn resolve_var(var: &str) -> Result<SecretString, SecretError> {
    match std::env::var(var) {
        Ok(val) if val.trim().is_empty() => Err(SecretError::Missing(var.to_string())),
        Ok(val) => Ok(SecretString::from(val)),
        Err(std::env::VarError::NotPresent) => Err(SecretError::Missing(var.to_string())),
        Err(std::env::VarError::NotUnicode(_)) => {
            Err(SecretError::InvalidUnicode(var.to_string()))
        }
    }
}

use thiserror::Error;

/// Errors related to session store operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session not found")]
    NotFound,

    #[error("invalid session id: '{0}'")]
    InvalidId(String),
}

/// Errors related to credential resolution.
#[derive(Debug, Error)]
pub enum SecretError {
    #[error("required environment variable '{0}' is not set")]
    Missing(String),

    #[error("environment variable '{0}' contains invalid unicode")]
    InvalidUnicode(String),
}

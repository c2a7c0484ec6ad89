//! Configuration loader for CampusConnect.
//!
//! Reads `config.toml` and deserializes it into [`ServerConfig`]. Falls
//! back to defaults when the file is missing or malformed -- the service
//! must come up with zero configuration beyond the API credential.

use std::path::Path;

use campus_types::config::ServerConfig;

/// Load server configuration from the given path.
///
/// - If the file does not exist, returns [`ServerConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_config(path: &Path) -> ServerConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("no config file at {}, using defaults", path.display());
            return ServerConfig::default();
        }
        Err(err) => {
            tracing::warn!("failed to read {}: {err}, using defaults", path.display());
            return ServerConfig::default();
        }
    };

    match toml::from_str::<ServerConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("failed to parse {}: {err}, using defaults", path.display());
            ServerConfig::default()
        }
    }
}

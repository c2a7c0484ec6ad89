//! Server configuration types for CampusConnect.
//!
//! `ServerConfig` represents the optional `config.toml` that controls the
//! bind address and model parameters. All fields have sensible defaults so
//! the service runs with no config file at all.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the CampusConnect service.
///
/// Loaded from `config.toml` next to the binary (path overridable via
/// `--config`). The one required setting -- the API credential -- is NOT
/// in this file; it comes from the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind the HTTP listener to.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Gemini model identifier.
    #[serde(default = "default_model")]
    pub model: String,

    /// Maximum tokens the model may generate per reply.
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    /// Sampling temperature passed through to the provider.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_max_output_tokens() -> u32 {
    1024
}

fn default_temperature() -> f64 {
    0.7
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            model: default_model(),
            max_output_tokens: default_max_output_tokens(),
            temperature: default_temperature(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default_values() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.max_output_tokens, 1024);
    }

    #[test]
    fn test_server_config_deserialize_empty_uses_defaults() {
        let config: ServerConfig = toml::from_str("").unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.model, "gemini-2.0-flash");
    }

    #[test]
    fn test_server_config_deserialize_partial_override() {
        let toml_str = r#"
port = 3000
model = "gemini-2.5-pro"
"#;
        let config: ServerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.model, "gemini-2.5-pro");
        // Untouched fields keep defaults
        assert_eq!(config.host, "127.0.0.1");
        assert!((config.temperature - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_server_config_serde_roundtrip() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 9000,
            model: "gemini-2.0-flash".to_string(),
            max_output_tokens: 2048,
            temperature: 0.4,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ServerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.host, "0.0.0.0");
        assert_eq!(parsed.port, 9000);
        assert_eq!(parsed.max_output_tokens, 2048);
    }
}

//! HTTP server configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Default listening port when `PORT` is not set
pub const DEFAULT_PORT: u16 = 3001;

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Allowed origins for cross-origin requests.
    /// An empty list means any origin is accepted (development mode).
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: DEFAULT_PORT,
            allowed_origins: vec![],
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Load configuration from environment variables
    ///
    /// Recognized variables:
    /// - `HOST` - bind address (default `0.0.0.0`)
    /// - `PORT` - listening port (default 3001)
    /// - `ALLOWED_ORIGINS` - comma-separated list of allowed CORS origins
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            host,
            port,
            allowed_origins,
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3001);
        assert!(config.allowed_origins.is_empty());
    }

    #[test]
    fn test_bind_address() {
        let config = ServerConfig::new("127.0.0.1", 8080);
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    // Single test for the env path so parallel tests never race on the
    // PORT and ALLOWED_ORIGINS variables
    #[test]
    fn test_from_env() {
        std::env::set_var("PORT", "4000");
        std::env::set_var(
            "ALLOWED_ORIGINS",
            "https://app.example.com, https://admin.example.com",
        );

        let config = ServerConfig::from_env();
        assert_eq!(config.port, 4000);
        assert_eq!(
            config.allowed_origins,
            vec!["https://app.example.com", "https://admin.example.com"]
        );

        // An unparsable port falls back to the default
        std::env::set_var("PORT", "not-a-port");
        let config = ServerConfig::from_env();
        assert_eq!(config.port, DEFAULT_PORT);

        std::env::remove_var("PORT");
        std::env::remove_var("ALLOWED_ORIGINS");
    }
}

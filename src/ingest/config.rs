//! Ingestion server configuration

use serde::{Deserialize, Serialize};

/// HTTP configuration for the ingestion boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 4100)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins for the dashboard (default: local dev servers)
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4100
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(), // dashboard dev server
        "http://localhost:5173".to_string(),
        "http://127.0.0.1:3000".to_string(),
    ]
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
        }
    }
}

impl IngestConfig {
    /// Create a config with the given port.
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

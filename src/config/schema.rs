//! Configuration schema definitions.
//!
//! Every section derives Serde traits so the whole tree can be read from a
//! TOML settings file, and every field has a default so an empty file (or no
//! file at all) yields a runnable relay.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration for the relay.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct RelayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Collaborator the relay forwards queries to.
    pub upstream: UpstreamConfig,

    /// Cross-origin policy.
    pub cors: CorsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
        }
    }
}

/// Collaborator endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Full URL queries are POSTed to.
    pub url: String,

    /// Pause applied after every successful round trip, in milliseconds.
    pub answer_delay_ms: u64,
}

impl UpstreamConfig {
    pub fn answer_delay(&self) -> Duration {
        Duration::from_millis(self.answer_delay_ms)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:5000/query".to_string(),
            answer_delay_ms: 5_000,
        }
    }
}

/// Cross-origin resource sharing policy.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CorsConfig {
    /// Origins allowed to call the relay from a browser.
    pub allowed_origins: Vec<String>,

    /// Methods advertised in preflight responses.
    pub allowed_methods: Vec<String>,

    /// Request headers advertised in preflight responses.
    pub allowed_headers: Vec<String>,

    /// Whether cookies and credentials may accompany cross-origin requests.
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://127.0.0.1:8081".to_string()],
            allowed_methods: ["GET", "POST", "PUT", "DELETE"]
                .into_iter()
                .map(String::from)
                .collect(),
            allowed_headers: vec!["Content-Type".to_string()],
            allow_credentials: true,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default `tracing` filter when `RUST_LOG` is not set.
    pub log_level: String,

    /// Use ANSI colors for console output.
    pub ansi: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "query_relay=info,tower_http=info".to_string(),
            ansi: true,
        }
    }
}

//! Configuration schema definitions.
//!
//! # Design Decisions
//! - Config is immutable once constructed; shared read-only after startup
//! - All fields have defaults; the binary runs entirely on them (no config
//!   file, flags, or environment lookup)
//! - Tests override `bind_address` to use OS-assigned loopback ports

use serde::{Deserialize, Serialize};

/// Root configuration for the bookstore API server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "localhost:9010").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            // Loopback only. The API is CORS-enabled but intended for
            // local development; widen this to expose it.
            bind_address: "localhost:9010".to_string(),
        }
    }
}

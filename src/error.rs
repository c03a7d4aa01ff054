//! Server lifecycle errors.
//!
//! All errors here are fatal: the bootstrap logs them and exits non-zero.
//! Handler-level errors never surface through this type; axum maps them to
//! HTTP status codes directly.

use thiserror::Error;

/// Error type for binding and serving the HTTP listener.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind to the configured address (port in use, permission
    /// denied, unresolvable host).
    #[error("Failed to bind: {0}")]
    Bind(std::io::Error),

    /// The listener failed while serving.
    #[error("Failed to serve: {0}")]
    Serve(std::io::Error),
}

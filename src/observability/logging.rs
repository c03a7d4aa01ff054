//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Configure log level at runtime via `RUST_LOG`

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Honors `RUST_LOG` when set; otherwise defaults to debug-level logs for
/// this crate and tower-http. Must be called once, before any log events.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookstore_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

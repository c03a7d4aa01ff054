//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via the tracing crate
//! - Log level configurable through `RUST_LOG`, with a sane default
//! - Per-request spans come from `tower_http::trace::TraceLayer`, wired in
//!   by the HTTP server

pub mod logging;

pub use logging::init;

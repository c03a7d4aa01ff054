//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup)
//!     → middleware/cors.rs (CORS headers, preflight short-circuit)
//!     → router dispatch (health handler or book routes)
//!     → Send to client
//! ```

pub mod middleware;
pub mod server;

pub use server::HttpServer;

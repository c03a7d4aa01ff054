//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Register the book resource route group
//! - Wire up middleware (CORS, tracing)
//! - Bind server to listener
//!
//! # Design Decisions
//! - The CORS layer wraps the whole router, so fallback responses (404,
//!   405) carry the CORS headers too
//! - Router and middleware are immutable after construction; requests
//!   share them without locks

use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::books;
use crate::http::middleware::cors::cors_middleware;

/// HTTP server for the bookstore API.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with all routes and middleware wired up.
    pub fn new() -> Self {
        Self {
            router: Self::build_router(),
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router() -> Router {
        let router = books::register_routes(Router::new());

        router
            .route("/", get(health_handler))
            .layer(middleware::from_fn(cors_middleware))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Serves until the listener fails; there is no graceful shutdown.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router).await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Health check: confirms the process is listening.
async fn health_handler() -> &'static str {
    "✅ Bookstore API is running\n"
}

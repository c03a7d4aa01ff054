//! Bookstore API server binary.
//!
//! Builds the router (book routes + health handler), wraps it in the
//! permissive CORS middleware, and serves on `localhost:9010` until a
//! fatal error. Bind and serve failures are logged and terminate the
//! process with a non-zero status.

use tokio::net::TcpListener;

use bookstore_api::config::ServerConfig;
use bookstore_api::error::ServerError;
use bookstore_api::http::HttpServer;
use bookstore_api::observability;

#[tokio::main]
async fn main() {
    observability::logging::init();

    tracing::info!("bookstore-api v0.1.0 starting");

    let config = ServerConfig::default();

    tracing::info!(
        bind_address = %config.listener.bind_address,
        "Configuration loaded"
    );

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Fatal server error");
        std::process::exit(1);
    }
}

async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .map_err(ServerError::Bind)?;

    println!(
        "🚀 Bookstore API running at: http://{}/",
        config.listener.bind_address
    );

    let server = HttpServer::new();
    server.run(listener).await.map_err(ServerError::Serve)?;

    Ok(())
}

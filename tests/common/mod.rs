//! Shared utilities for integration testing.

use std::net::SocketAddr;
use tokio::net::TcpListener;

use bookstore_api::http::HttpServer;

/// Start the bookstore server on an OS-assigned loopback port.
///
/// The listener is bound before this returns, so requests issued
/// immediately afterwards will connect.
pub async fn start_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let server = HttpServer::new();
        let _ = server.run(listener).await;
    });

    addr
}

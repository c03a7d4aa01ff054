//! Bookstore API Library
//!
//! A minimal HTTP service exposing CRUD operations over a book resource:
//!
//! ```text
//! TCP connection → CORS middleware → router dispatch
//!     → health handler (GET /)
//!     → book routes (/book/, /book/{book_id})
//! ```

pub mod books;
pub mod config;
pub mod error;
pub mod http;
pub mod observability;

pub use config::ServerConfig;
pub use error::ServerError;
pub use http::HttpServer;

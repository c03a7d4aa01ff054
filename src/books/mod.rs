//! Book resource subsystem.
//!
//! # Data Flow
//! ```text
//! router
//!     → register_routes (attach /book endpoints)
//!     → handlers.rs (extract path/body, call store)
//!     → store.rs (in-memory map behind RwLock)
//! ```
//!
//! # Design Decisions
//! - Storage is in-memory; a process restart loses all books
//! - Registration takes a router and returns it with routes attached; it
//!   never binds a listener and never blocks

pub mod handlers;
pub mod model;
pub mod store;

use axum::{routing::get, Router};
use std::sync::Arc;

use self::handlers::{create_book, delete_book, get_book, list_books, update_book};
use self::store::BookStore;

pub use model::Book;

/// Attach the book resource endpoints to the given router.
///
/// Registered routes (none collide with `GET /`):
/// - `GET /book/`: list all books
/// - `POST /book/`: create a book (store assigns the id)
/// - `GET /book/{book_id}`: fetch one book
/// - `PUT /book/{book_id}`: replace one book
/// - `DELETE /book/{book_id}`: remove one book
pub fn register_routes(router: Router) -> Router {
    let store = Arc::new(BookStore::new());

    let book_routes = Router::new()
        .route("/book/", get(list_books).post(create_book))
        .route(
            "/book/{book_id}",
            get(get_book).put(update_book).delete(delete_book),
        )
        .with_state(store);

    router.merge(book_routes)
}

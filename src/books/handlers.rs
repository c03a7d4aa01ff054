//! Axum handlers for the book resource.
//!
//! Malformed path ids and JSON bodies are rejected by the extractors
//! before these handlers run; the only error produced here is 404 for
//! unknown ids.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::books::model::Book;
use crate::books::store::BookStore;

pub async fn list_books(State(store): State<Arc<BookStore>>) -> Json<Vec<Book>> {
    Json(store.list())
}

pub async fn create_book(
    State(store): State<Arc<BookStore>>,
    Json(book): Json<Book>,
) -> Json<Book> {
    let created = store.create(book);
    tracing::debug!(book_id = created.id, "Book created");
    Json(created)
}

pub async fn get_book(
    State(store): State<Arc<BookStore>>,
    Path(book_id): Path<u64>,
) -> impl IntoResponse {
    match store.get(book_id) {
        Some(book) => Json(book).into_response(),
        None => not_found(book_id),
    }
}

pub async fn update_book(
    State(store): State<Arc<BookStore>>,
    Path(book_id): Path<u64>,
    Json(book): Json<Book>,
) -> impl IntoResponse {
    match store.update(book_id, book) {
        Some(updated) => {
            tracing::debug!(book_id, "Book updated");
            Json(updated).into_response()
        }
        None => not_found(book_id),
    }
}

pub async fn delete_book(
    State(store): State<Arc<BookStore>>,
    Path(book_id): Path<u64>,
) -> impl IntoResponse {
    match store.delete(book_id) {
        Some(deleted) => {
            tracing::debug!(book_id, "Book deleted");
            Json(deleted).into_response()
        }
        None => not_found(book_id),
    }
}

fn not_found(book_id: u64) -> axum::response::Response {
    tracing::debug!(book_id, "Book not found");
    (StatusCode::NOT_FOUND, "Book not found").into_response()
}

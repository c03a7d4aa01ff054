//! In-memory book storage.
//!
//! # Design Decisions
//! - `RwLock<HashMap>` shared via `Arc`: reads dominate, writes are rare
//! - Ids are assigned sequentially starting at 1 and never reused

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use crate::books::model::Book;

/// Thread-safe in-memory store for book records.
#[derive(Debug)]
pub struct BookStore {
    books: RwLock<HashMap<u64, Book>>,
    next_id: AtomicU64,
}

impl BookStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            books: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// All books, ordered by id.
    pub fn list(&self) -> Vec<Book> {
        let books = self.books.read().unwrap();
        let mut all: Vec<Book> = books.values().cloned().collect();
        all.sort_by_key(|b| b.id);
        all
    }

    /// Insert a new book, assigning it the next id.
    pub fn create(&self, mut book: Book) -> Book {
        book.id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut books = self.books.write().unwrap();
        books.insert(book.id, book.clone());
        book
    }

    /// Fetch a book by id.
    pub fn get(&self, id: u64) -> Option<Book> {
        let books = self.books.read().unwrap();
        books.get(&id).cloned()
    }

    /// Replace an existing book. The stored id is preserved; the incoming
    /// body's id field is ignored. Returns `None` if the id is unknown.
    pub fn update(&self, id: u64, mut book: Book) -> Option<Book> {
        let mut books = self.books.write().unwrap();
        if !books.contains_key(&id) {
            return None;
        }
        book.id = id;
        books.insert(id, book.clone());
        Some(book)
    }

    /// Remove a book, returning it if it existed.
    pub fn delete(&self, id: u64) -> Option<Book> {
        let mut books = self.books.write().unwrap();
        books.remove(&id)
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}

//! Book catalog seam
//!
//! The catalog is the canonical existence check for book IDs. "Book has
//! no analytics yet" and "book does not exist" are distinct conditions;
//! only the catalog can answer the latter. The platform's real catalog
//! lives in another service — this module defines the seam plus an
//! in-memory implementation backing this service.

use dashmap::DashMap;
use types::ids::BookId;

/// Canonical book existence checks.
pub trait BookCatalog: Send + Sync {
    /// Whether the book exists in the catalog at all.
    fn contains(&self, book_id: &BookId) -> bool;

    /// Register a book under the given title.
    fn register(&self, book_id: BookId, title: String);

    /// Title of a catalogued book.
    fn title(&self, book_id: &BookId) -> Option<String>;
}

/// In-memory catalog keyed by book ID.
#[derive(Default)]
pub struct InMemoryCatalog {
    books: DashMap<BookId, String>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered books.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl BookCatalog for InMemoryCatalog {
    fn contains(&self, book_id: &BookId) -> bool {
        self.books.contains_key(book_id)
    }

    fn register(&self, book_id: BookId, title: String) {
        self.books.insert(book_id, title);
    }

    fn title(&self, book_id: &BookId) -> Option<String> {
        self.books.get(book_id).map(|t| t.value().clone())
    }
}

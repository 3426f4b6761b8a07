//! HTTP request handlers

pub mod analytics;
pub mod books;
pub mod sessions;

use types::ids::BookId;
use uuid::Uuid;

use crate::error::AppError;

/// Parse a path segment into a `BookId`.
pub(crate) fn parse_book_id(raw: &str) -> Result<BookId, AppError> {
    Uuid::parse_str(raw)
        .map(BookId::from_uuid)
        .map_err(|_| AppError::BadRequest(format!("Invalid book id: {}", raw)))
}

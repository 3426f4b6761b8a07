//! Error types for the analytics core
//!
//! Shared error taxonomy using thiserror

use thiserror::Error;

/// Payload-level session errors
///
/// Raised at the ingestion boundary before a session reaches the
/// validator. A malformed payload never produces analytics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Reading progress out of range: {progress} (expected 0-100)")]
    ProgressOutOfRange { progress: u8 },

    #[error("Negative active time: {millis}ms")]
    NegativeActiveTime { millis: i64 },

    #[error("Negative start time: {millis}ms")]
    NegativeStartTime { millis: i64 },
}

/// Top-level analytics error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Book not found: {book_id}")]
    BookNotFound { book_id: String },

    #[error("Analytics update contended for book {book_id} after {attempts} attempts")]
    Contended { book_id: String, attempts: u32 },
}

//! Book registration and engagement endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use types::analytics::BookAnalytics;
use types::errors::AnalyticsError;
use types::ids::BookId;

use crate::error::AppError;
use crate::handlers::parse_book_id;
use crate::models::{RegisterBookRequest, RegisterBookResponse};
use crate::state::AppState;

/// `POST /v1/books` — register a book in the catalog.
pub async fn register_book(
    State(state): State<AppState>,
    Json(payload): Json<RegisterBookRequest>,
) -> Result<Json<RegisterBookResponse>, AppError> {
    if payload.title.trim().is_empty() {
        return Err(AppError::BadRequest("Book title must not be empty".into()));
    }

    let book_id = payload.book_id.unwrap_or_else(BookId::new);
    state.catalog.register(book_id, payload.title);

    tracing::info!(book_id = %book_id, "Book registered");

    Ok(Json(RegisterBookResponse {
        book_id,
        status: "REGISTERED".to_string(),
    }))
}

/// `POST /v1/books/:id/likes` — record a like.
pub async fn record_like(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> Result<Json<BookAnalytics>, AppError> {
    let book_id = lookup(&state, &book_id)?;
    let now_ms = Utc::now().timestamp_millis();
    let snapshot = state.store.record_like(book_id, now_ms)?;
    Ok(Json(snapshot))
}

/// `POST /v1/books/:id/comments` — record a comment.
pub async fn record_comment(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> Result<Json<BookAnalytics>, AppError> {
    let book_id = lookup(&state, &book_id)?;
    let now_ms = Utc::now().timestamp_millis();
    let snapshot = state.store.record_comment(book_id, now_ms)?;
    Ok(Json(snapshot))
}

fn lookup(state: &AppState, raw: &str) -> Result<BookId, AppError> {
    let book_id = parse_book_id(raw)?;
    if !state.catalog.contains(&book_id) {
        return Err(AnalyticsError::BookNotFound {
            book_id: book_id.to_string(),
        }
        .into());
    }
    Ok(book_id)
}

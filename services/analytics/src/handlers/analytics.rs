//! Analytics query endpoint

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use types::analytics::BookAnalytics;
use types::errors::AnalyticsError;

use crate::error::AppError;
use crate::handlers::parse_book_id;
use crate::state::AppState;

/// `GET /v1/books/:id/analytics` — current snapshot for a book.
///
/// A catalogued book with no recorded sessions gets a zeroed record;
/// 404 is reserved for books absent from the catalog.
pub async fn get_analytics(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> Result<Json<BookAnalytics>, AppError> {
    let book_id = parse_book_id(&book_id)?;

    state
        .rate_limiter
        .check_rate_limit(&format!("{}:analytics_query", book_id), 60, 30.0)?;

    if !state.catalog.contains(&book_id) {
        return Err(AnalyticsError::BookNotFound {
            book_id: book_id.to_string(),
        }
        .into());
    }

    let now_ms = Utc::now().timestamp_millis();
    let snapshot = state
        .store
        .snapshot(book_id, now_ms)
        .unwrap_or_else(|| BookAnalytics::zeroed(book_id));

    Ok(Json(snapshot))
}

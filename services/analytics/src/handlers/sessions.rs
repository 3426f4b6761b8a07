//! Session ingestion endpoint

use axum::{extract::State, Json};
use chrono::Utc;
use types::errors::AnalyticsError;

use crate::error::AppError;
use crate::models::{IngestSessionRequest, IngestSessionResponse};
use crate::state::AppState;

/// `POST /v1/sessions` — ingest one reading session.
///
/// Order of checks: rate limit, catalog existence, payload validity,
/// engagement validation, aggregation. A malformed payload or unknown
/// book never produces analytics.
pub async fn ingest_session(
    State(state): State<AppState>,
    Json(payload): Json<IngestSessionRequest>,
) -> Result<Json<IngestSessionResponse>, AppError> {
    state.rate_limiter.check_rate_limit(
        &format!("{}:session_ingest", payload.book_id),
        50,
        50.0,
    )?;

    if !state.catalog.contains(&payload.book_id) {
        return Err(AnalyticsError::BookNotFound {
            book_id: payload.book_id.to_string(),
        }
        .into());
    }

    let session = payload.to_session()?;
    let validation = state.validator.validate(&session);

    // The client hint is advisory only; a disagreement is worth a log
    // line for abuse analysis but changes nothing.
    if let Some(hint) = payload.is_valid_reading {
        if hint != validation.is_valid_reading {
            tracing::debug!(
                session_id = %session.session_id,
                book_id = %session.book_id,
                client_hint = hint,
                server_verdict = validation.is_valid_reading,
                reason = ?validation.reason,
                "Client validity hint disagrees with server validation"
            );
        }
    }

    let now_ms = Utc::now().timestamp_millis();
    let outcome = state.store.apply_session(&session, &validation, now_ms)?;

    let status = if outcome.is_duplicate() {
        "DUPLICATE"
    } else {
        "APPLIED"
    };

    Ok(Json(IngestSessionResponse {
        session_id: session.session_id,
        status: status.to_string(),
        validation,
        analytics: outcome.analytics().clone(),
    }))
}

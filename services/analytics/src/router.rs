use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{analytics, books, sessions};
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/sessions", post(sessions::ingest_session))
        .route("/books", post(books::register_book))
        .route("/books/:id/analytics", get(analytics::get_analytics))
        .route("/books/:id/likes", post(books::record_like))
        .route("/books/:id/comments", post(books::record_comment));

    Router::new()
        .nest("/v1", api_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

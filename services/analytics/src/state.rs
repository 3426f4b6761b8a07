//! Shared application state for the HTTP layer

use std::sync::Arc;

use crate::aggregator::AnalyticsStore;
use crate::catalog::{BookCatalog, InMemoryCatalog};
use crate::config::{AggregatorConfig, ValidatorConfig};
use crate::rate_limit::RateLimiter;
use crate::validator::SessionValidator;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<AnalyticsStore>,
    pub catalog: Arc<dyn BookCatalog>,
    pub validator: Arc<SessionValidator>,
    pub rate_limiter: Arc<RateLimiter>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(ValidatorConfig::default(), AggregatorConfig::default())
    }

    pub fn with_config(validator: ValidatorConfig, aggregator: AggregatorConfig) -> Self {
        Self {
            store: Arc::new(AnalyticsStore::new(aggregator)),
            catalog: Arc::new(InMemoryCatalog::new()),
            validator: Arc::new(SessionValidator::new(validator)),
            rate_limiter: Arc::new(RateLimiter::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

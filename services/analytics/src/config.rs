//! Tunable policy constants for validation and aggregation.

use rust_decimal::Decimal;

/// Thresholds for the session validator.
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Minimum focused engagement for a session to count as a read.
    pub min_engagement_ms: i64,
    /// Ceiling on human-plausible reading speed.
    pub max_words_per_sec: u64,
    /// Progress at or above this percentage is treated as a completed read.
    pub completion_threshold_pct: u8,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            min_engagement_ms: 15_000,
            max_words_per_sec: 20,
            completion_threshold_pct: 95,
        }
    }
}

/// Policy for the analytics aggregator.
#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    /// Income credited per valid read, in currency units.
    pub revenue_per_valid_read: Decimal,
    /// Maximum number of recent session IDs tracked per book for dedup.
    pub dedup_window: usize,
    /// Attempts to acquire a book's counters before surfacing contention.
    pub max_contention_retries: u32,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            // 0.05 currency units per valid read
            revenue_per_valid_read: Decimal::new(5, 2),
            dedup_window: 4096,
            max_contention_retries: 8,
        }
    }
}

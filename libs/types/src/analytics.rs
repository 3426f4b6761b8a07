//! Per-book analytics snapshot types
//!
//! A `BookAnalytics` record is the externally visible aggregate for one
//! book: cumulative counters plus trailing-24h windowed counters. It is
//! produced by the aggregator and consumed read-only by callers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::BookId;

/// Snapshot of a book's rolling analytics counters.
///
/// Invariants (checked by [`BookAnalytics::is_consistent`]):
/// - `views_last_24h <= views`
/// - `income_last_24h <= total_income`
/// - all monetary amounts are non-negative
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookAnalytics {
    /// Book this snapshot belongs to.
    pub book_id: BookId,
    /// Cumulative view count (monotonic).
    pub views: u64,
    /// Valid-read views within the trailing 24 hours.
    pub views_last_24h: u64,
    /// Cumulative like count.
    pub likes: u64,
    /// Cumulative comment count.
    pub comments: u64,
    /// Cumulative income in currency units.
    pub total_income: Decimal,
    /// Income earned within the trailing 24 hours.
    pub income_last_24h: Decimal,
}

impl BookAnalytics {
    /// Zeroed record for a book with no recorded sessions yet.
    ///
    /// Returned for catalogued books that have never been read; "no
    /// analytics yet" is not an error condition.
    pub fn zeroed(book_id: BookId) -> Self {
        Self {
            book_id,
            views: 0,
            views_last_24h: 0,
            likes: 0,
            comments: 0,
            total_income: Decimal::ZERO,
            income_last_24h: Decimal::ZERO,
        }
    }

    /// Validate counter invariants.
    pub fn is_consistent(&self) -> bool {
        self.views_last_24h <= self.views
            && self.income_last_24h <= self.total_income
            && self.total_income >= Decimal::ZERO
            && self.income_last_24h >= Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_record() {
        let book_id = BookId::new();
        let analytics = BookAnalytics::zeroed(book_id);

        assert_eq!(analytics.book_id, book_id);
        assert_eq!(analytics.views, 0);
        assert_eq!(analytics.views_last_24h, 0);
        assert_eq!(analytics.total_income, Decimal::ZERO);
        assert!(analytics.is_consistent());
    }

    #[test]
    fn test_consistency_check() {
        let mut analytics = BookAnalytics::zeroed(BookId::new());
        analytics.views = 10;
        analytics.views_last_24h = 3;
        analytics.total_income = Decimal::new(50, 2);
        analytics.income_last_24h = Decimal::new(15, 2);
        assert!(analytics.is_consistent());

        // Windowed views exceeding cumulative views is inconsistent
        analytics.views_last_24h = 11;
        assert!(!analytics.is_consistent());
    }

    #[test]
    fn test_negative_income_is_inconsistent() {
        let mut analytics = BookAnalytics::zeroed(BookId::new());
        analytics.total_income = Decimal::new(-1, 2);
        analytics.income_last_24h = Decimal::new(-1, 2);
        assert!(!analytics.is_consistent());
    }

    #[test]
    fn test_analytics_serialization() {
        let mut analytics = BookAnalytics::zeroed(BookId::new());
        analytics.views = 42;
        analytics.total_income = Decimal::new(210, 2);

        let json = serde_json::to_string(&analytics).unwrap();
        let deserialized: BookAnalytics = serde_json::from_str(&json).unwrap();
        assert_eq!(analytics, deserialized);
    }
}

//! Analytics aggregator
//!
//! Folds validated reading sessions into per-book rolling counters.
//! State is an explicitly owned keyed store: `DashMap<BookId, BookState>`
//! with per-key shard locking, so updates for one book are serialized
//! while distinct books never contend on a shared lock.
//!
//! Idempotency: each book tracks a bounded FIFO window of recently seen
//! session IDs; re-applying a session inside that window is a no-op that
//! returns the unchanged snapshot. Lock acquisition is bounded — a book
//! whose shard stays contended past the retry budget surfaces a
//! transient error rather than blocking indefinitely.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use rust_decimal::Decimal;
use tracing::{debug, warn};
use types::analytics::BookAnalytics;
use types::errors::AnalyticsError;
use types::ids::{BookId, SessionId};
use types::session::ReadingSession;

use crate::config::AggregatorConfig;
use crate::validator::ValidationResult;
use crate::window::RollingWindow;

/// Result of applying a single session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Session counted; snapshot reflects its effect.
    Applied(BookAnalytics),
    /// Session ID already seen; snapshot unchanged.
    Duplicate(BookAnalytics),
}

impl ApplyOutcome {
    /// The snapshot after the operation, applied or not.
    pub fn analytics(&self) -> &BookAnalytics {
        match self {
            ApplyOutcome::Applied(a) | ApplyOutcome::Duplicate(a) => a,
        }
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, ApplyOutcome::Duplicate(_))
    }
}

/// Mutable per-book counter state. Only reachable through the store's
/// per-key lock.
#[derive(Debug)]
struct BookState {
    views: u64,
    likes: u64,
    comments: u64,
    total_income: Decimal,
    window: RollingWindow,
    /// Bounded FIFO of recently applied session IDs for dedup.
    seen_sessions: VecDeque<SessionId>,
}

impl BookState {
    fn new(dedup_window: usize) -> Self {
        Self {
            views: 0,
            likes: 0,
            comments: 0,
            total_income: Decimal::ZERO,
            window: RollingWindow::new(),
            seen_sessions: VecDeque::with_capacity(dedup_window),
        }
    }

    fn has_seen(&self, session_id: &SessionId) -> bool {
        self.seen_sessions.contains(session_id)
    }

    fn record_session_id(&mut self, session_id: SessionId, dedup_window: usize) {
        if self.seen_sessions.len() >= dedup_window {
            self.seen_sessions.pop_front();
        }
        self.seen_sessions.push_back(session_id);
    }

    fn snapshot(&self, book_id: BookId, now_ms: i64) -> BookAnalytics {
        let totals = self.window.totals(now_ms);
        BookAnalytics {
            book_id,
            views: self.views,
            views_last_24h: totals.views,
            likes: self.likes,
            comments: self.comments,
            total_income: self.total_income,
            income_last_24h: totals.income,
        }
    }
}

/// Keyed store of per-book analytics counters.
pub struct AnalyticsStore {
    books: DashMap<BookId, BookState>,
    config: AggregatorConfig,
    /// Total sessions applied (valid or invalid, excluding duplicates).
    sessions_applied: AtomicU64,
    /// Total duplicate submissions ignored.
    duplicates_ignored: AtomicU64,
}

impl AnalyticsStore {
    pub fn new(config: AggregatorConfig) -> Self {
        Self {
            books: DashMap::new(),
            config,
            sessions_applied: AtomicU64::new(0),
            duplicates_ignored: AtomicU64::new(0),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(AggregatorConfig::default())
    }

    /// Fold one session into its book's counters.
    ///
    /// An invalid session still counts a page view; a valid session
    /// additionally feeds the trailing-24h window and earns the
    /// configured revenue delta. Duplicates are successful no-ops.
    pub fn apply_session(
        &self,
        session: &ReadingSession,
        validation: &ValidationResult,
        now_ms: i64,
    ) -> Result<ApplyOutcome, AnalyticsError> {
        let book_id = session.book_id;
        let session_id = session.session_id;
        let dedup_window = self.config.dedup_window;
        let revenue = self.config.revenue_per_valid_read;
        let is_valid = validation.is_valid_reading;

        let outcome = self.with_state(book_id, |state| {
            if state.has_seen(&session_id) {
                return ApplyOutcome::Duplicate(state.snapshot(book_id, now_ms));
            }
            state.record_session_id(session_id, dedup_window);

            state.views += 1;
            if is_valid {
                state.window.record_view(now_ms);
                state.total_income += revenue;
                state.window.record_income(now_ms, revenue);
            }

            ApplyOutcome::Applied(state.snapshot(book_id, now_ms))
        })?;

        match &outcome {
            ApplyOutcome::Applied(snapshot) => {
                self.sessions_applied.fetch_add(1, Ordering::Relaxed);
                debug!(
                    book_id = %book_id,
                    session_id = %session_id,
                    valid = is_valid,
                    views = snapshot.views,
                    "Session applied"
                );
            }
            ApplyOutcome::Duplicate(_) => {
                self.duplicates_ignored.fetch_add(1, Ordering::Relaxed);
                debug!(
                    book_id = %book_id,
                    session_id = %session_id,
                    "Duplicate session ignored"
                );
            }
        }

        Ok(outcome)
    }

    /// Record a like against a book's counters.
    pub fn record_like(&self, book_id: BookId, now_ms: i64) -> Result<BookAnalytics, AnalyticsError> {
        self.with_state(book_id, |state| {
            state.likes += 1;
            state.snapshot(book_id, now_ms)
        })
    }

    /// Record a comment against a book's counters.
    pub fn record_comment(
        &self,
        book_id: BookId,
        now_ms: i64,
    ) -> Result<BookAnalytics, AnalyticsError> {
        self.with_state(book_id, |state| {
            state.comments += 1;
            state.snapshot(book_id, now_ms)
        })
    }

    /// Current snapshot for a book, if any sessions were ever recorded.
    ///
    /// Returns `None` for a book this store has never seen; the caller
    /// decides whether that means "zeroed" (catalogued book) or
    /// "not found" (unknown book).
    pub fn snapshot(&self, book_id: BookId, now_ms: i64) -> Option<BookAnalytics> {
        self.books
            .get(&book_id)
            .map(|state| state.snapshot(book_id, now_ms))
    }

    /// Number of books with recorded analytics.
    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Total sessions applied since creation.
    pub fn sessions_applied(&self) -> u64 {
        self.sessions_applied.load(Ordering::Relaxed)
    }

    /// Total duplicate submissions ignored since creation.
    pub fn duplicates_ignored(&self) -> u64 {
        self.duplicates_ignored.load(Ordering::Relaxed)
    }

    /// Run `f` under the per-book lock, creating the state on first use.
    ///
    /// Acquisition is optimistic with a bounded retry budget; exceeding
    /// it surfaces `AnalyticsError::Contended` so no caller blocks
    /// indefinitely on a hot book.
    fn with_state<T>(
        &self,
        book_id: BookId,
        f: impl FnOnce(&mut BookState) -> T,
    ) -> Result<T, AnalyticsError> {
        let attempts = self.config.max_contention_retries;
        for attempt in 0..attempts {
            match self.books.try_entry(book_id) {
                Some(entry) => {
                    let mut entry = entry.or_insert_with(|| BookState::new(self.config.dedup_window));
                    return Ok(f(entry.value_mut()));
                }
                None => {
                    if attempt + 1 < attempts {
                        std::thread::yield_now();
                    }
                }
            }
        }

        warn!(book_id = %book_id, attempts, "Counter update contended past retry budget");
        Err(AnalyticsError::Contended {
            book_id: book_id.to_string(),
            attempts,
        })
    }
}

//! Client-reported reading session types
//!
//! A `ReadingSession` is created by the reading client when a session
//! ends and submitted once. It is immutable after construction; only
//! its validated effect on per-book counters is retained server-side.

use serde::{Deserialize, Serialize};

use crate::errors::SessionError;
use crate::ids::{BookId, ChapterId, SessionId};

/// A completed reading session as reported by the client.
///
/// All timestamps are Unix milliseconds. `reading_progress` is a
/// percentage in 0-100. Construction goes through [`ReadingSession::try_new`],
/// which enforces payload-level validity; engagement plausibility is a
/// separate concern handled by the session validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingSession {
    /// Unique session identifier, used for idempotent aggregation.
    pub session_id: SessionId,
    /// Book the session was read in.
    pub book_id: BookId,
    /// Chapter the session ended on.
    pub chapter_id: ChapterId,
    /// Session start (Unix millis, client clock).
    pub start_time: i64,
    /// Milliseconds of focused engagement.
    pub active_time_ms: i64,
    /// Reported progress through the chapter, 0-100.
    pub reading_progress: u8,
    /// Word count of the chapter.
    pub total_words: u64,
    /// Whether the reader tab was still active at submission.
    pub is_active: bool,
}

impl ReadingSession {
    /// Construct a session, rejecting malformed payloads.
    ///
    /// Progress outside 0-100 and negative times are boundary errors;
    /// they never reach the validator or the aggregator.
    #[allow(clippy::too_many_arguments)]
    pub fn try_new(
        session_id: SessionId,
        book_id: BookId,
        chapter_id: ChapterId,
        start_time: i64,
        active_time_ms: i64,
        reading_progress: u8,
        total_words: u64,
        is_active: bool,
    ) -> Result<Self, SessionError> {
        if reading_progress > 100 {
            return Err(SessionError::ProgressOutOfRange {
                progress: reading_progress,
            });
        }
        if active_time_ms < 0 {
            return Err(SessionError::NegativeActiveTime {
                millis: active_time_ms,
            });
        }
        if start_time < 0 {
            return Err(SessionError::NegativeStartTime { millis: start_time });
        }

        Ok(Self {
            session_id,
            book_id,
            chapter_id,
            start_time,
            active_time_ms,
            reading_progress,
            total_words,
            is_active,
        })
    }

    /// Words implied read by the reported progress (integer math,
    /// rounded down). Widened intermediate so hostile word counts
    /// cannot overflow.
    pub fn words_read(&self) -> u64 {
        (u128::from(self.total_words) * u128::from(self.reading_progress) / 100) as u64
    }
}

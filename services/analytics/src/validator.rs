//! Session validator
//!
//! Decides whether a client-reported reading session represents genuine
//! human engagement. Pure function of the session and the configured
//! thresholds; deterministic, no side effects.
//!
//! The client may attach its own validity hint, but that hint is never
//! authoritative — ingestion always runs this validator and logs
//! disagreements.

use serde::{Deserialize, Serialize};
use types::session::ReadingSession;

use crate::config::ValidatorConfig;

/// Why a session was (or was not) counted as a genuine read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationReason {
    /// Session passed all engagement checks.
    Ok,
    /// Focused engagement below the minimum threshold.
    TooShort,
    /// Implied reading speed above the human-plausible ceiling.
    TooFast,
    /// Completion claimed but the active time cannot cover the chapter
    /// at any plausible speed.
    ProgressMismatch,
}

/// Verdict for a single session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid_reading: bool,
    pub reason: ValidationReason,
}

impl ValidationResult {
    fn ok() -> Self {
        Self {
            is_valid_reading: true,
            reason: ValidationReason::Ok,
        }
    }

    fn rejected(reason: ValidationReason) -> Self {
        Self {
            is_valid_reading: false,
            reason,
        }
    }
}

/// Applies engagement-plausibility rules to reading sessions.
#[derive(Debug, Clone)]
pub struct SessionValidator {
    config: ValidatorConfig,
}

impl SessionValidator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(ValidatorConfig::default())
    }

    /// Validate a session against the configured thresholds.
    ///
    /// Rules are checked in order: engagement floor, speed ceiling,
    /// completion consistency. The first failing rule determines the
    /// rejection reason.
    pub fn validate(&self, session: &ReadingSession) -> ValidationResult {
        if session.active_time_ms < self.config.min_engagement_ms {
            return ValidationResult::rejected(ValidationReason::TooShort);
        }

        // Implied words/sec above ceiling: words_read * 1000 > ceiling * active_ms.
        // Widened integer math keeps this deterministic and overflow-free.
        let active_ms = u128::from(session.active_time_ms.unsigned_abs());
        let ceiling = u128::from(self.config.max_words_per_sec);
        if u128::from(session.words_read()) * 1000 > ceiling * active_ms {
            return ValidationResult::rejected(ValidationReason::TooFast);
        }

        // A claimed completion must be coverable: the whole chapter at
        // the ceiling speed still has to fit in the active time.
        if session.reading_progress >= self.config.completion_threshold_pct
            && u128::from(session.total_words) * 1000 > ceiling * active_ms
        {
            return ValidationResult::rejected(ValidationReason::ProgressMismatch);
        }

        ValidationResult::ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use types::ids::{BookId, ChapterId, SessionId};

    fn make_session(active_time_ms: i64, reading_progress: u8, total_words: u64) -> ReadingSession {
        ReadingSession::try_new(
            SessionId::new(),
            BookId::new(),
            ChapterId::new(),
            1_708_123_456_789,
            active_time_ms,
            reading_progress,
            total_words,
            true,
        )
        .unwrap()
    }

    #[test]
    fn test_genuine_session_accepted() {
        // 1960 words over 280s is 7 words/sec — plausible
        let validator = SessionValidator::with_defaults();
        let result = validator.validate(&make_session(280_000, 98, 2000));
        assert!(result.is_valid_reading);
        assert_eq!(result.reason, ValidationReason::Ok);
    }

    #[test]
    fn test_short_session_rejected() {
        let validator = SessionValidator::with_defaults();
        let result = validator.validate(&make_session(5_000, 100, 2000));
        assert!(!result.is_valid_reading);
        assert_eq!(result.reason, ValidationReason::TooShort);
    }

    #[test]
    fn test_engagement_floor_is_inclusive() {
        let validator = SessionValidator::with_defaults();
        // Exactly at the floor with a modest read is acceptable
        let result = validator.validate(&make_session(15_000, 10, 2000));
        assert!(result.is_valid_reading);

        let result = validator.validate(&make_session(14_999, 10, 2000));
        assert_eq!(result.reason, ValidationReason::TooShort);
    }

    #[test]
    fn test_implausible_speed_rejected() {
        // 9000 words claimed read in 20s = 450 words/sec
        let validator = SessionValidator::with_defaults();
        let result = validator.validate(&make_session(20_000, 90, 10_000));
        assert!(!result.is_valid_reading);
        assert_eq!(result.reason, ValidationReason::TooFast);
    }

    #[test]
    fn test_speed_ceiling_is_inclusive() {
        // Exactly 20 words/sec: 400 words in 20s
        let validator = SessionValidator::with_defaults();
        let result = validator.validate(&make_session(20_000, 100, 400));
        assert!(result.is_valid_reading);
    }

    #[test]
    fn test_progress_mismatch_rejected() {
        // 96% of 10_000 words in 480s passes the speed check (20/s on
        // words read), but a full 10_000-word completion cannot fit.
        let validator = SessionValidator::with_defaults();
        let result = validator.validate(&make_session(480_000, 96, 10_000));
        assert!(!result.is_valid_reading);
        assert_eq!(result.reason, ValidationReason::ProgressMismatch);
    }

    #[test]
    fn test_partial_progress_skips_completion_check() {
        // Same timing as above but 94% progress — below the completion
        // threshold, so only the speed rule applies. 9400 words in 480s
        // is 19.58/s, under the ceiling.
        let validator = SessionValidator::with_defaults();
        let result = validator.validate(&make_session(480_000, 94, 10_000));
        assert!(result.is_valid_reading);
    }

    #[test]
    fn test_zero_word_chapter_is_valid() {
        let validator = SessionValidator::with_defaults();
        let result = validator.validate(&make_session(30_000, 100, 0));
        assert!(result.is_valid_reading);
    }

    #[test]
    fn test_validator_is_deterministic() {
        let validator = SessionValidator::with_defaults();
        let session = make_session(480_000, 96, 10_000);
        let first = validator.validate(&session);
        for _ in 0..10 {
            assert_eq!(validator.validate(&session), first);
        }
    }

    proptest! {
        /// Any session under the engagement floor is invalid regardless
        /// of the other fields.
        #[test]
        fn prop_short_sessions_always_invalid(
            active_time_ms in 0i64..15_000,
            reading_progress in 0u8..=100,
            total_words in 0u64..1_000_000,
        ) {
            let validator = SessionValidator::with_defaults();
            let session = make_session(active_time_ms, reading_progress, total_words);
            let result = validator.validate(&session);
            prop_assert!(!result.is_valid_reading);
            prop_assert_eq!(result.reason, ValidationReason::TooShort);
        }

        /// A valid verdict implies the implied speed is within the ceiling.
        #[test]
        fn prop_valid_implies_plausible_speed(
            active_time_ms in 15_000i64..86_400_000,
            reading_progress in 0u8..=100,
            total_words in 0u64..1_000_000,
        ) {
            let validator = SessionValidator::with_defaults();
            let session = make_session(active_time_ms, reading_progress, total_words);
            let result = validator.validate(&session);
            if result.is_valid_reading {
                let words = u128::from(session.words_read());
                prop_assert!(words * 1000 <= 20u128 * active_time_ms as u128);
            }
        }
    }
}

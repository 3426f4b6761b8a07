//! Request/response payloads for the HTTP surface

use serde::{Deserialize, Serialize};
use types::analytics::BookAnalytics;
use types::errors::SessionError;
use types::ids::{BookId, ChapterId, SessionId};
use types::session::ReadingSession;

use crate::validator::ValidationResult;

/// Session submission from a reading client.
///
/// `is_valid_reading` is a client hint only; the server always
/// revalidates. Missing `session_id` means the server assigns one (the
/// client then loses retry idempotency, which is its choice).
#[derive(Debug, Clone, Deserialize)]
pub struct IngestSessionRequest {
    #[serde(default)]
    pub session_id: Option<SessionId>,
    pub book_id: BookId,
    pub chapter_id: ChapterId,
    pub start_time: i64,
    pub active_time_ms: i64,
    pub reading_progress: u8,
    pub total_words: u64,
    pub is_active: bool,
    #[serde(default)]
    pub is_valid_reading: Option<bool>,
}

impl IngestSessionRequest {
    /// Build the domain session, enforcing payload-level validity.
    pub fn to_session(&self) -> Result<ReadingSession, SessionError> {
        ReadingSession::try_new(
            self.session_id.unwrap_or_default(),
            self.book_id,
            self.chapter_id,
            self.start_time,
            self.active_time_ms,
            self.reading_progress,
            self.total_words,
            self.is_active,
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IngestSessionResponse {
    pub session_id: SessionId,
    /// "APPLIED" or "DUPLICATE".
    pub status: String,
    pub validation: ValidationResult,
    pub analytics: BookAnalytics,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterBookRequest {
    #[serde(default)]
    pub book_id: Option<BookId>,
    pub title: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterBookResponse {
    pub book_id: BookId,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_request() -> IngestSessionRequest {
        IngestSessionRequest {
            session_id: None,
            book_id: BookId::new(),
            chapter_id: ChapterId::new(),
            start_time: 1_708_123_456_789,
            active_time_ms: 280_000,
            reading_progress: 98,
            total_words: 2000,
            is_active: true,
            is_valid_reading: Some(true),
        }
    }

    #[test]
    fn test_to_session_assigns_id_when_missing() {
        let request = base_request();
        let session = request.to_session().unwrap();
        assert_eq!(session.book_id, request.book_id);
        assert_eq!(session.reading_progress, 98);
    }

    #[test]
    fn test_to_session_keeps_client_id() {
        let id = SessionId::new();
        let mut request = base_request();
        request.session_id = Some(id);
        assert_eq!(request.to_session().unwrap().session_id, id);
    }

    #[test]
    fn test_to_session_rejects_malformed_payload() {
        let mut request = base_request();
        request.active_time_ms = -1;
        assert!(request.to_session().is_err());
    }

    #[test]
    fn test_request_deserializes_without_optional_fields() {
        let json = format!(
            r#"{{"book_id":"{}","chapter_id":"{}","start_time":0,"active_time_ms":30000,"reading_progress":50,"total_words":1000,"is_active":false}}"#,
            BookId::new(),
            ChapterId::new()
        );
        let request: IngestSessionRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request.session_id, None);
        assert_eq!(request.is_valid_reading, None);
    }
}

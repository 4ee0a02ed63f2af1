//! Profile reader port (read side / CQRS queries).
//!
//! Session-scoped history and statistics.

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::record::{ProfileRecord, SessionStats};
use async_trait::async_trait;

/// Reader port for session-scoped profile queries.
#[async_trait]
pub trait ProfileReader: Send + Sync {
    /// List records of a session, newest first, at most `limit` of them.
    async fn list_by_session(
        &self,
        session_id: &SessionId,
        limit: u32,
    ) -> Result<Vec<ProfileRecord>, DomainError>;

    /// Aggregate stats for a session.
    ///
    /// An unknown session yields [`SessionStats::empty`], not an error.
    async fn session_stats(&self, session_id: &SessionId) -> Result<SessionStats, DomainError>;
}

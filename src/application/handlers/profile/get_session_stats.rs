//! GetSessionStatsHandler - Query handler for per-session statistics.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::record::{ProfileError, SessionStats};
use crate::ports::ProfileReader;

#[derive(Debug, Clone)]
pub struct GetSessionStatsQuery {
    pub session_id: SessionId,
}

pub struct GetSessionStatsHandler {
    reader: Arc<dyn ProfileReader>,
}

impl GetSessionStatsHandler {
    pub fn new(reader: Arc<dyn ProfileReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: GetSessionStatsQuery) -> Result<SessionStats, ProfileError> {
        Ok(self.reader.session_stats(&query.session_id).await?)
    }
}

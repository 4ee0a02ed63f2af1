//! In-Memory Profile Store Adapter
//!
//! Keeps profile records in process memory. Used when no database is
//! configured and as the store behind handler and router tests.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ProfileId, SessionId};
use crate::domain::record::{ProfileRecord, SessionStats};
use crate::ports::{ProfileReader, ProfileRepository};

/// In-memory storage for profile records, in insertion order.
#[derive(Debug, Clone)]
pub struct InMemoryProfileStore {
    records: Arc<RwLock<Vec<ProfileRecord>>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn record_count(&self) -> usize {
        self.records.read().await.len()
    }
}

impl Default for InMemoryProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileStore {
    async fn save(&self, record: &ProfileRecord) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.id() == record.id()) {
            return Err(DomainError::database(format!(
                "Profile {} already exists",
                record.id()
            )));
        }
        records.push(record.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ProfileId) -> Result<Option<ProfileRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }
}

#[async_trait]
impl ProfileReader for InMemoryProfileStore {
    async fn list_by_session(
        &self,
        session_id: &SessionId,
        limit: u32,
    ) -> Result<Vec<ProfileRecord>, DomainError> {
        let records = self.records.read().await;
        // Reverse insertion order first so equal timestamps list the later save first.
        let mut matching: Vec<ProfileRecord> = records
            .iter()
            .rev()
            .filter(|r| r.session_id() == session_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        matching.truncate(limit as usize);
        Ok(matching)
    }

    async fn session_stats(&self, session_id: &SessionId) -> Result<SessionStats, DomainError> {
        let records = self.records.read().await;
        Ok(SessionStats::from_records(
            records.iter().filter(|r| r.session_id() == session_id),
        ))
    }
}

//! Per-session aggregate statistics.

use serde::{Deserialize, Serialize};

use super::ProfileRecord;
use crate::domain::foundation::Timestamp;

/// Count and visit bounds over the records sharing a session id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    pub profile_count: u64,
    pub first_visit: Option<Timestamp>,
    pub last_visit: Option<Timestamp>,
}

impl SessionStats {
    /// Stats for a session with no records.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Folds records of one session into stats.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a ProfileRecord>) -> Self {
        records.into_iter().fold(Self::empty(), |stats, record| {
            let created = *record.created_at();
            SessionStats {
                profile_count: stats.profile_count + 1,
                first_visit: Some(stats.first_visit.map_or(created, |t| t.min(created))),
                last_visit: Some(stats.last_visit.map_or(created, |t| t.max(created))),
            }
        })
    }

    pub fn is_empty(&self) -> bool {
        self.profile_count == 0
    }
}

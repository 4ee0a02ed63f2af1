//! HTTP DTOs for session endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::record::SessionStats;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStatsResponse {
    pub success: bool,
    pub stats: SessionStats,
}

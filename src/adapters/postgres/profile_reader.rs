//! PostgreSQL implementation of ProfileReader.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use super::profile_repository::row_to_record;
use crate::domain::foundation::{DomainError, ErrorCode, SessionId, Timestamp};
use crate::domain::record::{ProfileRecord, SessionStats};
use crate::ports::ProfileReader;

/// PostgreSQL implementation of ProfileReader.
#[derive(Clone)]
pub struct PostgresProfileReader {
    pool: PgPool,
}

impl PostgresProfileReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileReader for PostgresProfileReader {
    async fn list_by_session(
        &self,
        session_id: &SessionId,
        limit: u32,
    ) -> Result<Vec<ProfileRecord>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, session_id, energy_centers, generated_profile, created_at, updated_at
            FROM energy_profiles
            WHERE session_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(session_id.as_str())
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list profiles: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_record).collect()
    }

    async fn session_stats(&self, session_id: &SessionId) -> Result<SessionStats, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT COUNT(*) AS profile_count,
                   MIN(created_at) AS first_visit,
                   MAX(created_at) AS last_visit
            FROM energy_profiles
            WHERE session_id = $1
            "#,
        )
        .bind(session_id.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to aggregate session stats: {}", e),
            )
        })?;

        let read_err = |e: sqlx::Error| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to read session stats: {}", e),
            )
        };
        let count: i64 = row.try_get("profile_count").map_err(read_err)?;
        let first: Option<chrono::DateTime<chrono::Utc>> =
            row.try_get("first_visit").map_err(read_err)?;
        let last: Option<chrono::DateTime<chrono::Utc>> =
            row.try_get("last_visit").map_err(read_err)?;

        Ok(SessionStats {
            profile_count: count.max(0) as u64,
            first_visit: first.map(Timestamp::from_datetime),
            last_visit: last.map(Timestamp::from_datetime),
        })
    }
}

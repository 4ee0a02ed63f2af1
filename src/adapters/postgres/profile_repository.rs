//! PostgreSQL implementation of ProfileRepository.
//!
//! Centers and generated profile are stored as JSONB documents.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, ProfileId, SessionId, Timestamp};
use crate::domain::record::ProfileRecord;
use crate::ports::ProfileRepository;

/// PostgreSQL implementation of ProfileRepository.
#[derive(Clone)]
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn save(&self, record: &ProfileRecord) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO energy_profiles (
                id, session_id, energy_centers, generated_profile, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(record.id().as_uuid())
        .bind(record.session_id().as_str())
        .bind(to_json(record.energy_centers())?)
        .bind(to_json(record.generated_profile())?)
        .bind(record.created_at().as_datetime())
        .bind(record.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert profile: {}", e),
            )
        })?;

        Ok(())
    }

    async fn find_by_id(&self, id: &ProfileId) -> Result<Option<ProfileRecord>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, session_id, energy_centers, generated_profile, created_at, updated_at
            FROM energy_profiles
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch profile: {}", e),
            )
        })?;

        row.map(row_to_record).transpose()
    }
}

pub(super) fn to_json<T: Serialize>(value: &T) -> Result<serde_json::Value, DomainError> {
    serde_json::to_value(value).map_err(|e| {
        DomainError::new(
            ErrorCode::SerializationError,
            format!("Failed to serialize document: {}", e),
        )
    })
}

pub(super) fn from_json<T: DeserializeOwned>(
    column: &str,
    value: serde_json::Value,
) -> Result<T, DomainError> {
    serde_json::from_value(value).map_err(|e| {
        DomainError::new(
            ErrorCode::SerializationError,
            format!("Invalid {} document: {}", column, e),
        )
    })
}

fn column<T>(row: &PgRow, name: &str) -> Result<T, DomainError>
where
    T: for<'r> sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to read column {}: {}", name, e),
        )
    })
}

/// A stored id that no longer parses is corrupt data, not a client mistake.
fn decode_session_id(raw: String) -> Result<SessionId, DomainError> {
    SessionId::new(raw).map_err(|e| {
        DomainError::new(
            ErrorCode::SerializationError,
            format!("Invalid stored session_id: {}", e),
        )
    })
}

pub(super) fn row_to_record(row: PgRow) -> Result<ProfileRecord, DomainError> {
    let id: Uuid = column(&row, "id")?;
    let session_id: String = column(&row, "session_id")?;
    let energy_centers: serde_json::Value = column(&row, "energy_centers")?;
    let generated_profile: serde_json::Value = column(&row, "generated_profile")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(&row, "created_at")?;
    let updated_at: chrono::DateTime<chrono::Utc> = column(&row, "updated_at")?;

    Ok(ProfileRecord::reconstitute(
        ProfileId::from_uuid(id),
        decode_session_id(session_id)?,
        from_json("energy_centers", energy_centers)?,
        from_json("generated_profile", generated_profile)?,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}

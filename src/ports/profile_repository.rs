//! Profile repository port (write side).
//!
//! Records are immutable once saved, so the write side only inserts and
//! loads by id.

use crate::domain::foundation::{DomainError, ProfileId};
use crate::domain::record::ProfileRecord;
use async_trait::async_trait;

/// Repository port for profile record persistence.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Save a new record.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, record: &ProfileRecord) -> Result<(), DomainError>;

    /// Find a record by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &ProfileId) -> Result<Option<ProfileRecord>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ProfileRepository) {}
    }
}

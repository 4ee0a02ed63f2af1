//! Session identity store port.
//!
//! Keeps a client's anonymous session id stable across runs.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, SessionId};

#[async_trait]
pub trait SessionIdentityStore: Send + Sync {
    /// Returns the stored session id, generating and persisting one if absent.
    ///
    /// A stored value that is not a valid session id is replaced.
    async fn load_or_create(&self) -> Result<SessionId, DomainError>;
}

//! File-based Session Identity Store
//!
//! Keeps the anonymous session id in a single text file so a client
//! reuses it across runs.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::ports::SessionIdentityStore;

/// File name used inside the configured directory.
pub const SESSION_FILE_NAME: &str = "energy_profile_session";

#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store the id in `dir/energy_profile_session`.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            path: dir.as_ref().join(SESSION_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn write(&self, id: &SessionId) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(io_error)?;
        }
        fs::write(&self.path, id.as_str()).await.map_err(io_error)
    }
}

fn io_error(err: std::io::Error) -> DomainError {
    DomainError::new(
        ErrorCode::InternalError,
        format!("Session file error: {}", err),
    )
}

#[async_trait]
impl SessionIdentityStore for FileSessionStore {
    async fn load_or_create(&self) -> Result<SessionId, DomainError> {
        match fs::read_to_string(&self.path).await {
            Ok(contents) => {
                if let Ok(id) = contents.trim().parse::<SessionId>() {
                    return Ok(id);
                }
                tracing::warn!(path = %self.path.display(), "replacing invalid stored session id");
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(io_error(e)),
        }

        let id = SessionId::generate();
        self.write(&id).await?;
        Ok(id)
    }
}

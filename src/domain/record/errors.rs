//! Profile-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ProfileId, ValidationError};

/// Errors returned by the profile command and query handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// No record with this id.
    NotFound(ProfileId),
    /// Request values were rejected.
    ValidationFailed { field: String, message: String },
    /// Storage or serialization failure.
    Infrastructure(String),
}

impl ProfileError {
    pub fn not_found(id: ProfileId) -> Self {
        ProfileError::NotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ProfileError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        ProfileError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            ProfileError::NotFound(_) => ErrorCode::ProfileNotFound,
            ProfileError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ProfileError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            ProfileError::NotFound(_) => "Profile not found".to_string(),
            ProfileError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            ProfileError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ProfileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ProfileError {}

impl From<ValidationError> for ProfileError {
    fn from(err: ValidationError) -> Self {
        ProfileError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for ProfileError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => ProfileError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => ProfileError::Infrastructure(err.to_string()),
        }
    }
}

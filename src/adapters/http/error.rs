//! Error envelope shared by every endpoint.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::domain::foundation::ErrorCode;
use crate::domain::record::ProfileError;

/// `{success: false, code, message}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl ToString, message: impl Into<String>) -> Self {
        Self {
            success: false,
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ProfileNotFound, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// Maps a handler error to its status and envelope.
///
/// Infrastructure details are only exposed when `verbose` is set.
pub fn handle_profile_error(error: ProfileError, verbose: bool) -> Response {
    let code = error.code();
    match error {
        ProfileError::NotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(code, "Profile not found")),
        )
            .into_response(),
        ProfileError::ValidationFailed { field, message } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::new(
                code,
                format!("Validation failed for {}: {}", field, message),
            )),
        )
            .into_response(),
        ProfileError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "profile storage failure");
            let message = if verbose {
                msg
            } else {
                "Internal server error".to_string()
            };
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(code, message)),
            )
                .into_response()
        }
    }
}

/// `Json` whose rejections use the error envelope.
///
/// Well-formed JSON that does not fit the request type is a 422; anything
/// else keeps the status axum assigns.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(json_rejection_response(rejection)),
        }
    }
}

fn json_rejection_response(rejection: JsonRejection) -> Response {
    let status = rejection.status();
    let body = match rejection {
        JsonRejection::JsonDataError(err) => ErrorResponse::validation(err.body_text()),
        other => ErrorResponse::bad_request(other.body_text()),
    };
    (status, Json(body)).into_response()
}

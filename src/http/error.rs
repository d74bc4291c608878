//! Mapping from service errors to HTTP responses.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::message::services::MessageServiceError;
use crate::user::services::UserDirectoryError;

const INTERNAL_MESSAGE: &str = "internal server error";

/// Result type for request handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Error returned by request handlers.
///
/// Rendered as `{"error": "<message>"}`. Internal failures are logged and
/// replaced by a generic message.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request was malformed or failed validation.
    #[error("{0}")]
    BadRequest(String),
    /// A referenced user or message does not exist.
    #[error("{0}")]
    NotFound(String),
    /// A backend failure the caller cannot act on.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::BadRequest(detail) | Self::NotFound(detail) => detail,
            Self::Internal(detail) => {
                error!(error = %detail, "request failed");
                INTERNAL_MESSAGE.to_owned()
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<MessageServiceError> for ApiError {
    fn from(err: MessageServiceError) -> Self {
        if err.is_invalid_argument() {
            Self::BadRequest(err.to_string())
        } else if err.is_not_found() {
            Self::NotFound(err.to_string())
        } else {
            Self::Internal(err.to_string())
        }
    }
}

impl From<UserDirectoryError> for ApiError {
    fn from(err: UserDirectoryError) -> Self {
        match err {
            UserDirectoryError::InvalidArgument(_) => Self::BadRequest(err.to_string()),
            UserDirectoryError::NotFound(_) => Self::NotFound(err.to_string()),
            UserDirectoryError::Repository(_) => Self::Internal(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

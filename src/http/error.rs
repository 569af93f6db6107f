//! Mapping of service failures to HTTP responses.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::task::services::TaskServiceError;

/// Error returned by task handlers.
///
/// The response body is the error message as plain text.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body could not be decoded.
    #[error("{0}")]
    BadRequest(String),

    /// The task service failed.
    #[error(transparent)]
    Service(#[from] TaskServiceError),
}

impl ApiError {
    /// Returns the response status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Service(TaskServiceError::Validation(_)) => {
                StatusCode::BAD_REQUEST
            }
            Self::Service(TaskServiceError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Service(TaskServiceError::Failed { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

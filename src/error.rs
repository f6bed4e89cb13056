use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::id::IdError;

/// Request-level failures. Every variant is handled at the boundary of the
/// request that produced it. The display strings of the client-error
/// variants are the exact bodies sent on the wire.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request body")]
    InvalidBody,

    #[error("Invalid URL format")]
    InvalidUrlFormat,

    #[error("Invalid request method")]
    InvalidMethod,

    /// Unknown id. Served as 400 rather than 404 to keep the wire format
    /// existing clients already depend on.
    #[error("URL not found")]
    NotFound,

    #[error(transparent)]
    Id(#[from] IdError),

    /// A stored URL that cannot be represented as a Location header value.
    #[error("stored URL is not usable as a redirect target")]
    InvalidRedirectTarget,
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidBody
            | AppError::InvalidUrlFormat
            | AppError::InvalidMethod
            | AppError::NotFound => StatusCode::BAD_REQUEST,
            AppError::Id(_) | AppError::InvalidRedirectTarget => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!("request failed: {:?}", self);
            return (status, "Internal error").into_response();
        }

        (status, self.to_string()).into_response()
    }
}

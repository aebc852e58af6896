use axum::http::StatusCode;
use thiserror::Error;

use crate::store::StoreError;

/// Errors a request can fail with, each mapped to an HTTP status.
///
/// The `Display` text is what clients see in the `error` field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("invalid id")]
    InvalidId,
    #[error("invalid request body")]
    InvalidBody,
    #[error("item not found")]
    NotFound,
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("not found")]
    NoRoute,
    /// Carries the cause for logging; clients only see a generic message
    #[error("internal error")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId | ApiError::InvalidBody => StatusCode::BAD_REQUEST,
            ApiError::NotFound | ApiError::NoRoute => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound,
            StoreError::LockPoisoned => ApiError::Internal(err.to_string()),
        }
    }
}

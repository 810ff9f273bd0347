use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

use health_monitor_domain::services::ServiceError;

use crate::entities::common::PublicErrorResponse;

/// Message sent to clients for every store fault
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Message sent to clients when a write collides with an existing record
pub const CONFLICT_MESSAGE: &str = "The request conflicts with an existing record";

/// Errors a handler can return
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body or path could not be parsed
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Body exceeded the request size limit
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// A required text field was empty
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A uniqueness constraint rejected the write
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The store failed; details are logged, never returned
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> PublicErrorResponse {
        let (error, message) = match self {
            ApiError::BadRequest(message) => ("bad_request", message.clone()),
            ApiError::PayloadTooLarge(message) => ("payload_too_large", message.clone()),
            ApiError::Validation(message) => ("validation_error", message.clone()),
            ApiError::Conflict(_) => ("conflict", CONFLICT_MESSAGE.to_string()),
            ApiError::Internal(_) => ("internal_error", INTERNAL_ERROR_MESSAGE.to_string()),
        };

        PublicErrorResponse {
            error: error.to_string(),
            message,
            details: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal(detail) => error!("Request failed: {}", detail),
            other => warn!("Request rejected: {}", other),
        }

        (self.status_code(), Json(self.body())).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::ValidationError(message) => ApiError::Validation(message),
            ServiceError::Conflict(message) => ApiError::Conflict(message),
            ServiceError::RepositoryError(message) => ApiError::Internal(message),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        // every other body rejection folds into 400
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return ApiError::PayloadTooLarge(rejection.body_text());
        }
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

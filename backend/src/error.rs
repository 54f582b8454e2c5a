//! Application error handling
//!
//! This module provides unified error handling for the API, converting
//! internal errors to HTTP responses. All error bodies use the wire shape
//! existing clients parse: `{error: true, message: "..."}`.

use crate::auth::TokenError;
use crate::db::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rsh_network_shared::types::ErrorBody;
use thiserror::Error;
use tracing::error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    /// No Authorization header on a protected route
    #[error("missing credential")]
    MissingCredential,

    /// Credential present but failed verification (signature, expiry, shape)
    #[error("invalid credential")]
    InvalidCredential,

    /// Verified identity without the required role
    #[error("forbidden")]
    Forbidden,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Store did not answer within the configured deadline
    #[error("dependency timeout")]
    DependencyTimeout,

    #[error("Database error")]
    Database(#[from] sqlx::Error),

    #[error("Token signing failed")]
    Signing(#[from] TokenError),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Query(e) => ApiError::Database(e),
            StoreError::Timeout => ApiError::DependencyTimeout,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::MissingCredential => {
                (StatusCode::UNAUTHORIZED, "Unauthorized Access".to_string())
            }
            ApiError::InvalidCredential => {
                (StatusCode::FORBIDDEN, "Unauthorized Access".to_string())
            }
            ApiError::Forbidden => (StatusCode::FORBIDDEN, "Forbidden Access".to_string()),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::DependencyTimeout => {
                (StatusCode::GATEWAY_TIMEOUT, "Dependency Timeout".to_string())
            }
            ApiError::Database(err) => {
                error!("Store error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A database error occurred".to_string(),
                )
            }
            ApiError::Signing(err) => {
                error!("Token signing error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, Json(ErrorBody::new(message))).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::missing_credential(ApiError::MissingCredential, StatusCode::UNAUTHORIZED)]
    #[case::invalid_credential(ApiError::InvalidCredential, StatusCode::FORBIDDEN)]
    #[case::forbidden(ApiError::Forbidden, StatusCode::FORBIDDEN)]
    #[case::not_found(ApiError::NotFound("User not found".to_string()), StatusCode::NOT_FOUND)]
    #[case::validation(ApiError::Validation("Invalid".to_string()), StatusCode::BAD_REQUEST)]
    #[case::timeout(ApiError::DependencyTimeout, StatusCode::GATEWAY_TIMEOUT)]
    fn test_status_mapping(#[case] error: ApiError, #[case] expected: StatusCode) {
        assert_eq!(error.into_response().status(), expected);
    }

    #[test]
    fn test_store_timeout_maps_to_504() {
        let response = ApiError::from(StoreError::Timeout).into_response();
        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    }
}

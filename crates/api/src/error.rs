use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use domainboard_domain::DomainError;
use serde::Serialize;

/// JSON error body: `message` always, `error` only for storage-level
/// failures that carry an underlying cause.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub message: String,
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ApiError {
    /// Maps a domain error to its HTTP shape. `failure_message` labels
    /// 500-class responses the way the route describes its own failure.
    pub fn from_domain(err: DomainError, failure_message: &str) -> Self {
        match err {
            DomainError::NotFound(_) => Self::message(StatusCode::NOT_FOUND, err.to_string()),
            DomainError::Validation(msg) => Self::message(StatusCode::BAD_REQUEST, msg),
            DomainError::EmailAlreadyRegistered => {
                Self::message(StatusCode::BAD_REQUEST, err.to_string())
            }
            DomainError::InvalidCredentials => {
                Self::message(StatusCode::UNAUTHORIZED, err.to_string())
            }
            other => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: ErrorBody {
                    error: Some(other.to_string()),
                    message: failure_message.to_string(),
                },
            },
        }
    }

    pub fn message(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                error: None,
                message: message.into(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_keeps_descriptive_message() {
        let err = ApiError::from_domain(
            DomainError::NotFound("DNS record".to_string()),
            "Failed to fetch DNS record",
        );
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.body.message, "DNS record not found");
        assert!(err.body.error.is_none());
    }

    #[test]
    fn test_storage_failure_carries_cause() {
        let err = ApiError::from_domain(
            DomainError::DatabaseError("disk I/O error".to_string()),
            "Failed to fetch DNS records",
        );
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body.message, "Failed to fetch DNS records");
        assert_eq!(err.body.error.as_deref(), Some("Database error: disk I/O error"));
    }

    #[test]
    fn test_invalid_credentials_is_401() {
        let err = ApiError::from_domain(DomainError::InvalidCredentials, "Login failed");
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.body.message, "Invalid credentials");
    }
}

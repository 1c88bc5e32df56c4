//! Error types for the roster service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Roster error types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("Activity not found: {0}")]
    ActivityNotFound(String),

    #[error("Student {email} is already signed up for {activity}")]
    AlreadyEnrolled { activity: String, email: String },

    #[error("Student {email} is not signed up for {activity}")]
    NotEnrolled { activity: String, email: String },

    #[error("Missing required query parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid query string: {0}")]
    InvalidQuery(String),

    #[error("Invalid seed data: {0}")]
    InvalidSeed(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl RosterError {
    /// HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RosterError::ActivityNotFound(_) => StatusCode::NOT_FOUND,
            RosterError::AlreadyEnrolled { .. } => StatusCode::BAD_REQUEST,
            RosterError::NotEnrolled { .. } => StatusCode::BAD_REQUEST,
            RosterError::MissingParameter(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RosterError::InvalidQuery(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RosterError::InvalidSeed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RosterError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
        }
    }
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(e: serde_json::Error) -> Self {
        RosterError::InvalidSeed(format!("JSON parse error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_keywords() {
        let not_found = RosterError::ActivityNotFound("Nonexistent Activity".into());
        assert!(not_found.to_string().to_lowercase().contains("not found"));

        let already = RosterError::AlreadyEnrolled {
            activity: "Art Club".into(),
            email: "a@mergington.edu".into(),
        };
        assert!(already.to_string().to_lowercase().contains("already signed up"));

        let not_enrolled = RosterError::NotEnrolled {
            activity: "Drama Club".into(),
            email: "a@mergington.edu".into(),
        };
        assert!(not_enrolled.to_string().to_lowercase().contains("not signed up"));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            RosterError::ActivityNotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            RosterError::AlreadyEnrolled {
                activity: "x".into(),
                email: "y".into()
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RosterError::NotEnrolled {
                activity: "x".into(),
                email: "y".into()
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RosterError::InvalidQuery("bad".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            RosterError::RateLimitExceeded.status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
    }
}

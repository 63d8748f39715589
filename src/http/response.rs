//! JSON response envelopes and the typed API error.
//!
//! # Responsibilities
//! - Define the `{success, message, ...}` envelope shared by all responses
//! - Map API errors to HTTP status codes (validation → 400, internal → 500)
//!
//! # Design Decisions
//! - Validation failures name the issue generically; internal failures
//!   return a fixed message with the detail logged server-side only

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::submissions::{Submission, SubmissionError};

/// Errors a request handler can surface to the caller.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client sent an invalid submission.
    #[error("{0}")]
    Validation(String),

    /// Something unexpected failed while handling the request.
    #[error("Failed to submit form. Please try again later.")]
    Internal,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SubmissionError> for ApiError {
    fn from(err: SubmissionError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            success: false,
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Envelope for failed requests.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
}

/// Envelope for an accepted submission.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: &'static str,
    pub data: Submission,
}

/// Envelope for the full submission listing.
#[derive(Debug, Serialize)]
pub struct SubmissionsResponse {
    pub success: bool,
    pub count: usize,
    pub submissions: Vec<Submission>,
}

/// Health probe response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let err = ApiError::from(SubmissionError::MissingField);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.to_string(),
            "Name, email, and message are required fields"
        );
    }

    #[test]
    fn test_internal_maps_to_500() {
        let err = ApiError::Internal;
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.to_string(),
            "Failed to submit form. Please try again later."
        );
    }

    #[test]
    fn test_error_response_status() {
        let response = ApiError::Validation("bad".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::Internal.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

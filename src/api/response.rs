//! Response types for the Shift Earnings API.
//!
//! This module defines the error response structures, the mapping from
//! engine errors to HTTP statuses, and the summary response body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{IncomeSummary, ShiftRecord};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidTime { field, .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_TIME",
                    message,
                    format!("Field '{}' must be a 24-hour time such as 09:30", field),
                ),
            ),
            EngineError::InvalidDate { .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_DATE",
                    message,
                    "Dates must be calendar dates such as 2026-01-14",
                ),
            ),
            EngineError::InvalidJob { .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_JOB",
                    message,
                    "The job configuration contains invalid values",
                ),
            ),
            EngineError::JobNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "JOB_NOT_FOUND",
                    message,
                    format!("No job with id '{}' is configured", id),
                ),
            },
            EngineError::NoActiveJob => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "NO_ACTIVE_JOB",
                    message,
                    "Pass a job or job_id, or select an active job",
                ),
            },
        }
    }
}

/// Response body for the `/summary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// Totals for the requested period.
    pub summary: IncomeSummary,
    /// Every calculated shift, including those outside the period.
    pub records: Vec<ShiftRecord>,
}

//! Response types for the leave-desk API.
//!
//! This module defines the response bodies, the error response structures
//! and the mapping from [`LeaveError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::LeaveError;
use crate::holidays::{HolidayListing, HolidaySummary, Toast};

/// Body of `GET /holidays`.
#[derive(Debug, Clone, Serialize)]
pub struct HolidaysResponse {
    /// Holidays ascending by date.
    pub holidays: Vec<HolidayListing>,
    /// Summary counts.
    pub summary: HolidaySummary,
}

/// Body of `POST /holidays/import`.
#[derive(Debug, Clone, Serialize)]
pub struct ImportResponse {
    /// Always true; rejected files produce an error instead.
    pub accepted: bool,
    /// The toast that will be shown once the simulated import finishes.
    pub notification: Toast,
}

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

    /// Creates the error returned when a deletion is not confirmed.
    pub fn confirmation_required(prompt: &str) -> Self {
        Self::with_details(
            "CONFIRMATION_REQUIRED",
            prompt,
            "Repeat the request with ?confirm=true to delete the holiday",
        )
    }

    /// Creates an unsupported export format error response.
    pub fn unsupported_format(format: &str) -> Self {
        Self::with_details(
            "UNSUPPORTED_FORMAT",
            format!("Unsupported export format: {}", format),
            "Supported formats are 'xlsx' and 'pdf'",
        )
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
    /// Pairs an error body with a status code.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<LeaveError> for ApiErrorResponse {
    fn from(error: LeaveError) -> Self {
        let message = error.to_string();
        match error {
            LeaveError::ConfigNotFound { .. }
            | LeaveError::ConfigParseError { .. }
            | LeaveError::SeedParseError { .. } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            ),
            LeaveError::HolidayNotFound { .. } => ApiErrorResponse::new(
                StatusCode::NOT_FOUND,
                ApiError::new("HOLIDAY_NOT_FOUND", message),
            ),
            LeaveError::InvalidHoliday { .. } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::validation_error(message),
            ),
            LeaveError::UnsupportedImportFile { .. } => ApiErrorResponse::new(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                ApiError::new("UNSUPPORTED_IMPORT_FILE", message),
            ),
            LeaveError::ImportFileTooLarge { .. } => ApiErrorResponse::new(
                StatusCode::PAYLOAD_TOO_LARGE,
                ApiError::new("IMPORT_FILE_TOO_LARGE", message),
            ),
            LeaveError::NoPendingAction { .. } => ApiErrorResponse::new(
                StatusCode::CONFLICT,
                ApiError::new("NO_PENDING_ACTION", message),
            ),
            LeaveError::Serialization { .. } | LeaveError::Delivery { .. } => {
                ApiErrorResponse::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::with_details("EXPORT_ERROR", "Export failed", message),
                )
            }
        }
    }
}

// src/application/error_handling.rs
//
// Error surfacing for calling code
//
// ARCHITECTURE:
// - Every ApiError maps to one UI-friendly ErrorResponse
// - Failures are typically shown as error-severity notifications
// - The caller still receives the original error

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::notifications::NotificationCenter;

/// Standard error payload for UI boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub endpoint: String,
    pub status: Option<u16>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Backend answered 404
    NotFound,

    /// Backend answered with any other failure status
    Backend,

    /// Request never completed or the body was unreadable
    Transport,
}

impl ErrorResponse {
    pub fn from_api_error(error: &ApiError) -> Self {
        let error_type = match error {
            ApiError::Backend { status: 404, .. } => ErrorType::NotFound,
            ApiError::Backend { .. } => ErrorType::Backend,
            ApiError::Transport { .. } => ErrorType::Transport,
        };

        Self {
            success: false,
            error_type,
            message: error.message().to_string(),
            endpoint: error.endpoint().to_string(),
            status: error.status(),
        }
    }
}

impl From<ApiError> for ErrorResponse {
    fn from(error: ApiError) -> Self {
        Self::from_api_error(&error)
    }
}

/// Helper trait to convert Results to ErrorResponse
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, ErrorResponse>;
}

impl<T> ToErrorResponse<T> for ApiResult<T> {
    fn to_error_response(self) -> Result<T, ErrorResponse> {
        self.map_err(ErrorResponse::from)
    }
}

/// Shows an error notification for a failed result and passes it through.
pub trait NotifyOnError<T> {
    fn notify_on_error(self, center: &NotificationCenter) -> ApiResult<T>;
}

impl<T> NotifyOnError<T> for ApiResult<T> {
    fn notify_on_error(self, center: &NotificationCenter) -> ApiResult<T> {
        if let Err(err) = &self {
            center.error(err.message());
        }
        self
    }
}

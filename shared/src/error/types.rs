//! AppError and the JSON error envelope

use std::collections::HashMap;
use std::fmt::Display;

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Error returned by every Steppia operation.
///
/// `details` carries machine-readable context for the client: the offending
/// `field` of a form, the id of a missing record, the day a spin was refused.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Error with the code's default message
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ── Input ───────────────────────────────────────────────────────

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Rejected form field; the field name goes to `details.field`
    pub fn field(code: ErrorCode, field: &str, msg: impl Into<String>) -> Self {
        Self::with_message(code, msg).with_detail("field", field)
    }

    /// Missing or blank required field
    pub fn required(field: &str) -> Self {
        Self::field(ErrorCode::RequiredField, field, format!("{field} is required"))
    }

    // ── Records ─────────────────────────────────────────────────────

    /// Generic missing record, named in the message
    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{r} not found")).with_detail("resource", r)
    }

    /// Missing record with a resource-specific code, e.g.
    /// `AppError::missing(ErrorCode::JobNotFound, "job_id", 7)`
    pub fn missing(code: ErrorCode, key: &str, id: i64) -> Self {
        Self::new(code).with_detail(key, id)
    }

    pub fn already_exists(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::AlreadyExists, format!("{r} already exists"))
            .with_detail("resource", r)
    }

    // ── Auth ────────────────────────────────────────────────────────

    pub fn unauthorized() -> Self {
        Self::new(ErrorCode::NotAuthenticated)
    }

    /// Same error for unknown user and wrong password
    pub fn invalid_credentials() -> Self {
        Self::new(ErrorCode::InvalidCredentials)
    }

    pub fn invalid_token(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::TokenInvalid, msg)
    }

    pub fn token_expired() -> Self {
        Self::new(ErrorCode::TokenExpired)
    }

    pub fn admin_required() -> Self {
        Self::new(ErrorCode::AdminRequired)
    }

    // ── Rewards ─────────────────────────────────────────────────────

    /// Spin refused: the gate is closed until the next civil day
    pub fn gate_closed(today: impl Display) -> Self {
        Self::new(ErrorCode::SpinAlreadyUsedToday).with_detail("today", today.to_string())
    }

    // ── System ──────────────────────────────────────────────────────

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }
}

/// Result type for Steppia operations
pub type AppResult<T> = Result<T, AppError>;

/// JSON envelope: `{ code, message, data?, details? }`
///
/// Handlers return plain JSON on success; errors always go out in this shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// 0 on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: Some(0),
            message: "OK".to_string(),
            data: Some(data),
            details: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn error(err: &AppError) -> Self {
        Self {
            code: Some(err.code.code()),
            message: err.message.clone(),
            data: None,
            details: err.details.clone(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.http_status();

        match self.code.category() {
            ErrorCategory::System => {
                tracing::error!(code = %self.code, message = %self.message, "System error occurred");
            }
            ErrorCategory::Auth | ErrorCategory::Permission => {
                tracing::debug!(code = %self.code, "Request rejected by auth");
            }
            _ => {}
        }

        (status, axum::Json(ApiResponse::<()>::error(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_message_comes_from_the_code() {
        let err = AppError::new(ErrorCode::JobNotFound);
        assert_eq!(err.message, "Job not found");
        assert!(err.details.is_none());
    }

    #[test]
    fn field_errors_name_the_field() {
        let err = AppError::required("amount");
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.message, "amount is required");
        assert_eq!(err.details.unwrap()["field"], "amount");

        let err = AppError::field(ErrorCode::InvalidHours, "hours", "hours must not be negative");
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn missing_record_carries_its_id() {
        let err = AppError::missing(ErrorCode::WorkLogNotFound, "work_log_id", 7);
        assert_eq!(err.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(err.details.unwrap()["work_log_id"], 7);

        let err = AppError::not_found("Work log 7");
        assert_eq!(err.message, "Work log 7 not found");
    }

    #[test]
    fn gate_closed_is_a_conflict() {
        let err = AppError::gate_closed("2024-06-01");
        assert_eq!(err.code, ErrorCode::SpinAlreadyUsedToday);
        assert_eq!(err.http_status(), StatusCode::CONFLICT);
        assert_eq!(err.details.unwrap()["today"], "2024-06-01");
    }

    #[test]
    fn error_envelope_shape() {
        let err = AppError::required("date");
        let json = serde_json::to_value(ApiResponse::<()>::error(&err)).unwrap();
        assert_eq!(json["code"], 7);
        assert_eq!(json["message"], "date is required");
        assert_eq!(json["details"]["field"], "date");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn success_envelope_shape() {
        let json = serde_json::to_value(ApiResponse::success(vec![1, 2])).unwrap();
        assert_eq!(json["code"], 0);
        assert_eq!(json["data"], serde_json::json!([1, 2]));
        assert!(json.get("details").is_none());
    }
}

//! Unified error codes for Steppia
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Member / profile errors
//! - 4xxx: Job & application errors
//! - 5xxx: Work log errors
//! - 6xxx: Reward (roulette / coupon) errors
//! - 7xxx: Consultation & schedule errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so clients can switch on
/// them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (username/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Username is already registered
    UsernameTaken = 1005,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Admin role required
    AdminRequired = 2003,

    // ==================== 3xxx: Member ====================
    /// Member profile not found
    ProfileNotFound = 3001,
    /// Email already used by another member
    EmailAlreadyExists = 3002,

    // ==================== 4xxx: Job ====================
    /// Job not found
    JobNotFound = 4001,
    /// Application not found
    ApplicationNotFound = 4002,

    // ==================== 5xxx: Work log ====================
    /// Work log not found
    WorkLogNotFound = 5001,
    /// Hours missing, non-numeric or negative
    InvalidHours = 5002,
    /// Earnings missing, non-numeric or negative
    InvalidEarnings = 5003,

    // ==================== 6xxx: Reward ====================
    /// Roulette already spun today
    SpinAlreadyUsedToday = 6001,
    /// Coupon not found
    CouponNotFound = 6002,
    /// Coupon already used
    CouponAlreadyUsed = 6003,

    // ==================== 7xxx: Consultation ====================
    /// No consultant given and none assigned
    ConsultantNotSelected = 7001,
    /// Schedule entry not found
    ScheduleNotFound = 7002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::InvalidCredentials => "Invalid username or password",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::TokenInvalid => "Authentication token is invalid",
            ErrorCode::UsernameTaken => "Username is already taken",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::AdminRequired => "Administrator role is required",

            // Member
            ErrorCode::ProfileNotFound => "Member profile not found",
            ErrorCode::EmailAlreadyExists => "Email is already registered",

            // Job
            ErrorCode::JobNotFound => "Job not found",
            ErrorCode::ApplicationNotFound => "Application not found",

            // Work log
            ErrorCode::WorkLogNotFound => "Work log not found",
            ErrorCode::InvalidHours => "Hours must be a non-negative number",
            ErrorCode::InvalidEarnings => "Earnings must be a non-negative integer",

            // Reward
            ErrorCode::SpinAlreadyUsedToday => "Roulette has already been spun today",
            ErrorCode::CouponNotFound => "Coupon not found",
            ErrorCode::CouponAlreadyUsed => "Coupon has already been used",

            // Consultation
            ErrorCode::ConsultantNotSelected => "No consultant selected",
            ErrorCode::ScheduleNotFound => "Schedule entry not found",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),
            1005 => Ok(ErrorCode::UsernameTaken),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2003 => Ok(ErrorCode::AdminRequired),

            // Member
            3001 => Ok(ErrorCode::ProfileNotFound),
            3002 => Ok(ErrorCode::EmailAlreadyExists),

            // Job
            4001 => Ok(ErrorCode::JobNotFound),
            4002 => Ok(ErrorCode::ApplicationNotFound),

            // Work log
            5001 => Ok(ErrorCode::WorkLogNotFound),
            5002 => Ok(ErrorCode::InvalidHours),
            5003 => Ok(ErrorCode::InvalidEarnings),

            // Reward
            6001 => Ok(ErrorCode::SpinAlreadyUsedToday),
            6002 => Ok(ErrorCode::CouponNotFound),
            6003 => Ok(ErrorCode::CouponAlreadyUsed),

            // Consultation
            7001 => Ok(ErrorCode::ConsultantNotSelected),
            7002 => Ok(ErrorCode::ScheduleNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

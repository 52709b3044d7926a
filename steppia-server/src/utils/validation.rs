//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! SQLite TEXT has no built-in length enforcement.

use crate::utils::{AppError, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// Person names, company names, consultant names
pub const MAX_NAME_LEN: usize = 100;

/// Usernames (login id)
pub const MIN_USERNAME_LEN: usize = 3;
pub const MAX_USERNAME_LEN: usize = 150;

/// Passwords (before hashing)
pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_PASSWORD_LEN: usize = 128;

/// Short identifiers: phone, salary text, roulette labels
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Addresses, job locations
pub const MAX_ADDRESS_LEN: usize = 500;

/// Notes, schedule details, consultation questions
pub const MAX_NOTE_LEN: usize = 1000;

/// Job descriptions, template answers
pub const MAX_LONG_TEXT_LEN: usize = 5000;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
///
/// Length counts characters, not bytes (Japanese input).
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::field(
            ErrorCode::ValidationFailed,
            field,
            format!("{field} must not be empty"),
        ));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::field(
            ErrorCode::ValidationFailed,
            field,
            format!("{field} is too long ({len} chars, max {max_len})"),
        ));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value {
        let len = v.chars().count();
        if len > max_len {
            return Err(AppError::field(
                ErrorCode::ValidationFailed,
                field,
                format!("{field} is too long ({len} chars, max {max_len})"),
            ));
        }
    }
    Ok(())
}

/// Validate a length range (inclusive) for credentials.
pub fn validate_length_range(
    value: &str,
    field: &str,
    min_len: usize,
    max_len: usize,
) -> Result<(), AppError> {
    let len = value.chars().count();
    if len < min_len || len > max_len {
        return Err(AppError::field(
            ErrorCode::ValidationFailed,
            field,
            format!("{field} must be between {min_len} and {max_len} characters"),
        ));
    }
    Ok(())
}

/// Minimal email shape check: one `@` with text on both sides and a dot in the domain.
pub fn validate_email(email: &str) -> Result<(), AppError> {
    validate_required_text(email, "email", MAX_EMAIL_LEN)?;
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };
    if !valid {
        return Err(AppError::field(
            ErrorCode::ValidationFailed,
            "email",
            format!("Invalid email address: {email}"),
        ));
    }
    Ok(())
}

//! Work-log form input parsing
//!
//! Clients post the raw form: numbers arrive either as JSON numbers or as
//! the text typed into the field. Everything is checked before any write.

use chrono::NaiveDate;
use shared::models::{NumberInput, UNSPECIFIED_COMPANY, WorkLogInput};

use crate::utils::time::parse_date;
use crate::utils::validation::{MAX_NAME_LEN, validate_optional_text};
use crate::utils::{AppError, AppResult, ErrorCode};

/// Work log fields ready to be stored
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedWorkLog {
    pub work_date: NaiveDate,
    pub hours: f64,
    pub earnings: i64,
    pub company_name: String,
    pub job_id: Option<i64>,
}

/// Validate a create / update payload.
///
/// - `date` required, `YYYY-MM-DD`
/// - `amount` required, non-negative integer
/// - `hours` optional (0 when absent or blank), non-negative
/// - `company` optional, defaults to `（未入力）`
pub fn parse_work_log_input(input: &WorkLogInput) -> AppResult<ValidatedWorkLog> {
    let date = input
        .date
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .ok_or_else(|| AppError::required("date"))?;
    let work_date = parse_date(date)?;

    let earnings = match &input.amount {
        Some(amount) => parse_earnings(amount)?.ok_or_else(|| AppError::required("amount"))?,
        None => return Err(AppError::required("amount")),
    };

    let hours = match &input.hours {
        Some(hours) => parse_hours(hours)?.unwrap_or(0.0),
        None => 0.0,
    };

    validate_optional_text(&input.company, "company", MAX_NAME_LEN)?;
    let company_name = input
        .company
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(UNSPECIFIED_COMPANY)
        .to_string();

    Ok(ValidatedWorkLog {
        work_date,
        hours,
        earnings,
        company_name,
        job_id: input.job_id,
    })
}

/// Blank text counts as absent (`Ok(None)`).
fn parse_earnings(value: &NumberInput) -> AppResult<Option<i64>> {
    let invalid = || {
        AppError::field(
            ErrorCode::InvalidEarnings,
            "amount",
            "amount must be a non-negative integer",
        )
    };

    let earnings = match value {
        NumberInput::Int(n) => *n,
        NumberInput::Float(f) => {
            if !f.is_finite() || f.fract() != 0.0 || *f > i64::MAX as f64 {
                return Err(invalid());
            }
            *f as i64
        }
        NumberInput::Text(s) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            s.parse::<i64>().map_err(|_| invalid())?
        }
    };

    if earnings < 0 {
        return Err(invalid());
    }
    Ok(Some(earnings))
}

/// Blank text counts as absent (`Ok(None)`).
fn parse_hours(value: &NumberInput) -> AppResult<Option<f64>> {
    let invalid =
        || AppError::field(ErrorCode::InvalidHours, "hours", "hours must be a non-negative number");

    let hours = match value {
        NumberInput::Int(n) => *n as f64,
        NumberInput::Float(f) => *f,
        NumberInput::Text(s) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            s.parse::<f64>().map_err(|_| invalid())?
        }
    };

    if !hours.is_finite() || hours < 0.0 {
        return Err(invalid());
    }
    Ok(Some(hours))
}

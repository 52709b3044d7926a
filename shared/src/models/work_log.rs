//! Work log (稼働記録) models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Company name stored when the caller leaves it blank
pub const UNSPECIFIED_COMPANY: &str = "（未入力）";

/// Work log row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct WorkLog {
    pub id: i64,
    pub user_id: i64,
    pub job_id: Option<i64>,
    pub company_name: String,
    pub work_date: NaiveDate,
    pub hours: f64,
    pub earnings: i64,
    pub created_at: i64,
}

/// Numeric form field: clients send either a JSON number or a string
/// typed into a text box ("3000", "1.5").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberInput {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Create / update work log payload (raw, validated server side)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkLogInput {
    pub date: Option<String>,
    pub amount: Option<NumberInput>,
    pub hours: Option<NumberInput>,
    pub company: Option<String>,
    pub job_id: Option<i64>,
}

/// Sum of hours and earnings over a set of logs
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkTotals {
    pub hours: f64,
    pub earnings: i64,
}

/// Result of saving a work log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkLogSaved {
    pub work_log: WorkLog,
    /// Totals for the whole work date, this entry included
    pub day_totals: WorkTotals,
    pub show_warning: bool,
}

/// Work log listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkLogList {
    pub logs: Vec<WorkLog>,
    pub totals: WorkTotals,
}

//! Schedule models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Schedule entry kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduleKind {
    General,
    /// Consultation booking
    Booking,
}

impl ScheduleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleKind::General => "GENERAL",
            ScheduleKind::Booking => "BOOKING",
        }
    }
}

/// Schedule row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Schedule {
    pub id: i64,
    pub user_id: i64,
    pub kind: ScheduleKind,
    pub schedule_date: NaiveDate,
    /// `HH:MM`
    pub schedule_time: String,
    pub detail: String,
    pub created_at: i64,
}

/// Create generic schedule entry payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleCreate {
    pub date: String,
    pub time: String,
    pub detail: String,
}

/// Book a consultation payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingCreate {
    pub date: String,
    pub time: String,
    /// Falls back to the member's assigned consultant
    pub consultant: Option<String>,
    /// Coupon consumed by this booking
    pub coupon_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResult {
    pub schedule: Schedule,
    pub used_coupon_id: Option<i64>,
}

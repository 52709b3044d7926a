//! Consultation booking
//!
//! A booking is a `BOOKING` schedule entry. When a coupon is attached it is
//! consumed in the same transaction; an invalid coupon rejects the booking.

use chrono::NaiveDate;
use shared::models::{BookingResult, ScheduleKind};
use sqlx::SqlitePool;

use crate::db::repository::{coupon, schedule};
use crate::utils::{AppError, AppResult, ErrorCode};

/// Schedule detail text for a booking
pub fn booking_detail(consultant: &str) -> String {
    format!("{consultant} コンサル予約")
}

/// Pick the consultant: explicit choice first, then the assigned one
pub fn resolve_consultant(requested: Option<&str>, assigned: Option<&str>) -> AppResult<String> {
    requested
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .or_else(|| assigned.map(str::trim).filter(|c| !c.is_empty()))
        .map(str::to_string)
        .ok_or_else(|| AppError::new(ErrorCode::ConsultantNotSelected))
}

pub async fn book_consultation(
    pool: &SqlitePool,
    user_id: i64,
    consultant: &str,
    date: NaiveDate,
    time: &str,
    coupon_id: Option<i64>,
) -> AppResult<BookingResult> {
    let mut tx = pool
        .begin()
        .await
        .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

    // write first: a WAL read transaction cannot upgrade once another writer commits
    if let Some(id) = coupon_id
        && !coupon::mark_used(&mut tx, user_id, id).await?
    {
        return Err(match coupon::find_by_id(&mut tx, user_id, id).await? {
            Some(_) => AppError::new(ErrorCode::CouponAlreadyUsed).with_detail("coupon_id", id),
            None => AppError::missing(ErrorCode::CouponNotFound, "coupon_id", id),
        });
    }

    let entry = schedule::insert(
        &mut tx,
        user_id,
        ScheduleKind::Booking,
        date,
        time,
        &booking_detail(consultant),
    )
    .await?;

    tx.commit()
        .await
        .map_err(|e| AppError::database(format!("Failed to commit booking: {e}")))?;

    tracing::info!(user_id, schedule_id = entry.id, ?coupon_id, "Consultation booked");

    Ok(BookingResult {
        schedule: entry,
        used_coupon_id: coupon_id,
    })
}

//! Schedule & Booking API Handlers

use axum::{Json, extract::State};
use shared::models::{BookingCreate, BookingResult, Schedule, ScheduleCreate, ScheduleKind};

use crate::auth::CurrentUser;
use crate::consult::{book_consultation, resolve_consultant};
use crate::core::ServerState;
use crate::db::repository::{member, schedule};
use crate::utils::time::{parse_date, parse_time};
use crate::utils::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};

/// GET /api/schedules
pub async fn list(
    State(state): State<ServerState>,
    current_user: CurrentUser,
) -> AppResult<Json<Vec<Schedule>>> {
    let entries = schedule::find_by_user(&state.pool, current_user.id, None).await?;
    Ok(Json(entries))
}

/// POST /api/schedules - 一般日程
pub async fn create(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Json(payload): Json<ScheduleCreate>,
) -> AppResult<Json<Schedule>> {
    let date = parse_date(&payload.date)?;
    let time = parse_time(&payload.time)?;
    let detail = payload.detail.trim();
    validate_required_text(detail, "detail", MAX_NOTE_LEN)?;

    let mut conn = state
        .pool
        .acquire()
        .await
        .map_err(|e| AppError::database(format!("Failed to acquire connection: {e}")))?;
    let entry = schedule::insert(
        &mut conn,
        current_user.id,
        ScheduleKind::General,
        date,
        &time,
        detail,
    )
    .await?;

    tracing::info!(user_id = current_user.id, schedule_id = entry.id, "Schedule created");
    Ok(Json(entry))
}

/// GET /api/bookings
pub async fn list_bookings(
    State(state): State<ServerState>,
    current_user: CurrentUser,
) -> AppResult<Json<Vec<Schedule>>> {
    let entries =
        schedule::find_by_user(&state.pool, current_user.id, Some(ScheduleKind::Booking)).await?;
    Ok(Json(entries))
}

/// POST /api/bookings - 预约咨询
///
/// 未指定顾问时使用已分配的担当顾问。
pub async fn book(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Json(payload): Json<BookingCreate>,
) -> AppResult<Json<BookingResult>> {
    let date = parse_date(&payload.date)?;
    let time = parse_time(&payload.time)?;

    let assigned = member::find_by_user(&state.pool, current_user.id)
        .await?
        .and_then(|m| m.assigned_consultant);
    let consultant = resolve_consultant(payload.consultant.as_deref(), assigned.as_deref())?;
    validate_required_text(&consultant, "consultant", MAX_NAME_LEN)?;

    let result = book_consultation(
        &state.pool,
        current_user.id,
        &consultant,
        date,
        &time,
        payload.coupon_id,
    )
    .await?;
    Ok(Json(result))
}

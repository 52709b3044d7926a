//! My Page API Handlers

use axum::{Json, extract::State};
use shared::models::{DEFAULT_CONSULTANT_NAME, MyPage, ScheduleKind};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{application, consult, coupon, member, schedule};
use crate::utils::AppResult;

/// GET /api/mypage
pub async fn get(
    State(state): State<ServerState>,
    current_user: CurrentUser,
) -> AppResult<Json<MyPage>> {
    let user_id = current_user.id;

    let consultant_name = member::find_by_user(&state.pool, user_id)
        .await?
        .and_then(|m| m.assigned_consultant)
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_CONSULTANT_NAME.to_string());

    let consult_logs = consult::find_logs_by_user(&state.pool, user_id).await?;
    let bookings = schedule::find_by_user(&state.pool, user_id, Some(ScheduleKind::Booking)).await?;
    let applications = application::find_by_user(&state.pool, user_id).await?;
    let coupons = coupon::find_unused_by_user(&state.pool, user_id).await?;

    Ok(Json(MyPage {
        consultant_name,
        consult_logs,
        bookings,
        applications,
        coupons,
    }))
}

//! Coupon API Handlers

use axum::{Json, extract::State};
use shared::models::Coupon;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::coupon;
use crate::utils::AppResult;

/// GET /api/coupons - 未使用优惠券 (最新在前)
pub async fn list(
    State(state): State<ServerState>,
    current_user: CurrentUser,
) -> AppResult<Json<Vec<Coupon>>> {
    let coupons = coupon::find_unused_by_user(&state.pool, current_user.id).await?;
    Ok(Json(coupons))
}

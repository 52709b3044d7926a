//! Progress API Handlers

use axum::{Json, extract::State};
use shared::models::ProgressView;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::progress;
use crate::progress::evaluate;
use crate::utils::AppResult;

/// GET /api/progress - 每次请求重新计算，不缓存最高步骤
pub async fn get(
    State(state): State<ServerState>,
    current_user: CurrentUser,
) -> AppResult<Json<ProgressView>> {
    let snapshot = progress::load_snapshot(&state.pool, current_user.id).await?;
    Ok(Json(evaluate(&snapshot)))
}

//! Applications API Handlers

use axum::{Json, extract::State};
use shared::models::ApplicationWithJob;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::application;
use crate::utils::AppResult;

/// GET /api/applications - 当前用户的应聘列表 (最新在前)
pub async fn list(
    State(state): State<ServerState>,
    current_user: CurrentUser,
) -> AppResult<Json<Vec<ApplicationWithJob>>> {
    let applications = application::find_by_user(&state.pool, current_user.id).await?;
    Ok(Json(applications))
}

//! Roulette API Handlers

use axum::{Json, extract::State};
use shared::models::{RouletteStatus, SpinRequest, SpinResult};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::member;
use crate::rewards::{can_spin, resolve_spin};
use crate::utils::{AppError, AppResult, ErrorCode};

/// GET /api/roulette
pub async fn status(
    State(state): State<ServerState>,
    current_user: CurrentUser,
) -> AppResult<Json<RouletteStatus>> {
    let member = member::find_by_user(&state.pool, current_user.id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::ProfileNotFound))?;
    let today = state.today();

    Ok(Json(RouletteStatus {
        can_spin: can_spin(member.last_roulette_date, today),
        today,
        wheel: state.wheel.segments().to_vec(),
    }))
}

/// POST /api/roulette/spin
///
/// `result` 为空时由服务端转盘抽取。
pub async fn spin(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Json(payload): Json<SpinRequest>,
) -> AppResult<Json<SpinResult>> {
    let label = match payload.result {
        Some(label) => label,
        None => state.wheel.draw(&mut rand::thread_rng()),
    };

    let result = resolve_spin(&state.pool, current_user.id, &label, state.today()).await?;
    Ok(Json(result))
}

//! Work Log API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{WorkLog, WorkLogInput, WorkLogList, WorkLogSaved};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{RepoError, job, member, work_log};
use crate::utils::{AppError, AppResult, ErrorCode};
use crate::work_log::{ValidatedWorkLog, parse_work_log_input};

fn work_log_not_found(id: i64) -> AppError {
    AppError::missing(ErrorCode::WorkLogNotFound, "work_log_id", id)
}

async fn validate(state: &ServerState, input: &WorkLogInput) -> AppResult<ValidatedWorkLog> {
    let data = parse_work_log_input(input)?;
    if let Some(job_id) = data.job_id
        && job::find_by_id(&state.pool, job_id).await?.is_none()
    {
        return Err(AppError::missing(ErrorCode::JobNotFound, "job_id", job_id));
    }
    Ok(data)
}

/// Day totals for the saved entry's date plus the configured warning rule
async fn saved(state: &ServerState, user_id: i64, entry: WorkLog) -> AppResult<WorkLogSaved> {
    let day_totals = work_log::day_totals(&state.pool, user_id, entry.work_date).await?;
    let daily_wage = member::find_by_user(&state.pool, user_id)
        .await?
        .map(|m| m.daily_wage)
        .unwrap_or_default();
    let show_warning = state.config.work_log_rule.should_warn(&day_totals, daily_wage);

    if show_warning {
        tracing::info!(
            user_id,
            work_date = %entry.work_date,
            earnings = day_totals.earnings,
            hours = day_totals.hours,
            rule = %state.config.work_log_rule,
            "Work log threshold reached"
        );
    }

    Ok(WorkLogSaved {
        work_log: entry,
        day_totals,
        show_warning,
    })
}

/// GET /api/work-logs - 我的工时记录 (日期倒序) + 合计
pub async fn list(
    State(state): State<ServerState>,
    current_user: CurrentUser,
) -> AppResult<Json<WorkLogList>> {
    let logs = work_log::find_by_user(&state.pool, current_user.id).await?;
    let totals = work_log::totals(&state.pool, current_user.id).await?;
    Ok(Json(WorkLogList { logs, totals }))
}

/// GET /api/work-logs/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<WorkLog>> {
    let entry = work_log::find_by_id(&state.pool, current_user.id, id)
        .await?
        .ok_or_else(|| work_log_not_found(id))?;
    Ok(Json(entry))
}

/// POST /api/work-logs - 新增工时记录
pub async fn create(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Json(payload): Json<WorkLogInput>,
) -> AppResult<Json<WorkLogSaved>> {
    let data = validate(&state, &payload).await?;
    let entry = work_log::create(&state.pool, current_user.id, &data).await?;
    tracing::info!(user_id = current_user.id, work_log_id = entry.id, "Work log created");

    Ok(Json(saved(&state, current_user.id, entry).await?))
}

/// PUT /api/work-logs/{id} - 编辑工时记录
pub async fn update(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<WorkLogInput>,
) -> AppResult<Json<WorkLogSaved>> {
    let data = validate(&state, &payload).await?;
    let entry = match work_log::update(&state.pool, current_user.id, id, &data).await {
        Ok(entry) => entry,
        Err(RepoError::NotFound(_)) => return Err(work_log_not_found(id)),
        Err(e) => return Err(e.into()),
    };
    tracing::info!(user_id = current_user.id, work_log_id = id, "Work log updated");

    Ok(Json(saved(&state, current_user.id, entry).await?))
}

/// DELETE /api/work-logs/{id}
pub async fn delete(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    if !work_log::delete(&state.pool, current_user.id, id).await? {
        return Err(work_log_not_found(id));
    }
    tracing::info!(user_id = current_user.id, work_log_id = id, "Work log deleted");
    Ok(Json(true))
}

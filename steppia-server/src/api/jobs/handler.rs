//! Jobs API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{ApplyResult, DEFAULT_CONSULTANT_NAME, Job, JobCreate};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{application, job, member};
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_LONG_TEXT_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

fn job_not_found(id: i64) -> AppError {
    AppError::missing(ErrorCode::JobNotFound, "job_id", id)
}

fn validate_job(data: &JobCreate) -> AppResult<JobCreate> {
    let data = JobCreate {
        title: data.title.trim().to_string(),
        company: data.company.trim().to_string(),
        location: data.location.trim().to_string(),
        salary: data.salary.trim().to_string(),
        description: data.description.trim().to_string(),
    };
    validate_required_text(&data.title, "title", MAX_NAME_LEN)?;
    validate_required_text(&data.company, "company", MAX_NAME_LEN)?;
    validate_required_text(&data.location, "location", MAX_ADDRESS_LEN)?;
    validate_required_text(&data.salary, "salary", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&data.description, "description", MAX_LONG_TEXT_LEN)?;
    Ok(data)
}

/// GET /api/jobs - 求职信息列表 (最新在前)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Job>>> {
    let jobs = job::find_all(&state.pool).await?;
    Ok(Json(jobs))
}

/// GET /api/jobs/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Job>> {
    let job = job::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| job_not_found(id))?;
    Ok(Json(job))
}

/// POST /api/jobs - 发布求职信息 (管理员)
pub async fn create(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Json(payload): Json<JobCreate>,
) -> AppResult<Json<Job>> {
    current_user.require_admin()?;
    let data = validate_job(&payload)?;

    let job = job::create(&state.pool, &data).await?;
    tracing::info!(job_id = job.id, title = %job.title, operator = %current_user.username, "Job created");
    Ok(Json(job))
}

/// POST /api/jobs/{id}/apply - 应聘
///
/// 同一用户对同一职位重复应聘时返回已有记录 (`created = false`)。
pub async fn apply(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApplyResult>> {
    if job::find_by_id(&state.pool, id).await?.is_none() {
        return Err(job_not_found(id));
    }

    let (application, created) = application::get_or_create(&state.pool, current_user.id, id).await?;

    let consultant_name = member::find_by_user(&state.pool, current_user.id)
        .await?
        .and_then(|m| m.assigned_consultant)
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_CONSULTANT_NAME.to_string());

    if created {
        tracing::info!(user_id = current_user.id, job_id = id, "Application submitted");
    }

    Ok(Json(ApplyResult {
        application,
        created,
        consultant_name,
    }))
}

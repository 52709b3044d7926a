//! Consult API Handlers

use axum::{Json, extract::State};
use shared::models::{
    ConsultLog, ConsultRequest, ConsultResponse, ConsultTemplate, ConsultTemplateCreate,
};

use crate::auth::CurrentUser;
use crate::consult::respond;
use crate::core::ServerState;
use crate::db::repository::consult;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_LONG_TEXT_LEN, MAX_NOTE_LEN, validate_required_text};

/// POST /api/consult - 咨询
///
/// 每次回答都会记录；未登录时 user_id 为空。
pub async fn ask(
    State(state): State<ServerState>,
    current_user: Option<CurrentUser>,
    Json(payload): Json<ConsultRequest>,
) -> AppResult<Json<ConsultResponse>> {
    let question = payload.message.trim();
    validate_required_text(question, "message", MAX_NOTE_LEN)?;

    let templates = consult::find_all_templates(&state.pool).await?;
    let (response, source) = respond(question, &templates);

    let user_id = current_user.as_ref().map(|u| u.id);
    consult::insert_log(&state.pool, user_id, question, &response).await?;

    tracing::debug!(?user_id, ?source, "Consultation answered");
    Ok(Json(ConsultResponse { response, source }))
}

/// GET /api/consult/history - 我的咨询记录 (最新在前)
pub async fn history(
    State(state): State<ServerState>,
    current_user: CurrentUser,
) -> AppResult<Json<Vec<ConsultLog>>> {
    let logs = consult::find_logs_by_user(&state.pool, current_user.id).await?;
    Ok(Json(logs))
}

/// POST /api/consult/templates - 新增定型回答 (管理员)
pub async fn create_template(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Json(payload): Json<ConsultTemplateCreate>,
) -> AppResult<Json<ConsultTemplate>> {
    current_user.require_admin()?;

    let question = payload.question.trim();
    let answer = payload.answer.trim();
    validate_required_text(question, "question", MAX_NOTE_LEN)?;
    validate_required_text(answer, "answer", MAX_LONG_TEXT_LEN)?;

    let template = consult::create_template(&state.pool, question, answer).await?;
    tracing::info!(template_id = template.id, operator = %current_user.username, "Consult template created");
    Ok(Json(template))
}

//! Profile API Handlers

use axum::{Json, extract::State};
use shared::models::{ConsultantAssign, Member, ProfileUpdate};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{RepoError, member};
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_email, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

fn trim_field(value: &mut Option<String>) {
    if let Some(v) = value {
        *v = v.trim().to_string();
    }
}

fn normalize_update(mut data: ProfileUpdate) -> AppResult<ProfileUpdate> {
    for field in [
        &mut data.last_name,
        &mut data.first_name,
        &mut data.last_name_kana,
        &mut data.first_name_kana,
        &mut data.address,
        &mut data.phone,
        &mut data.email,
    ] {
        trim_field(field);
    }

    validate_optional_text(&data.last_name, "last_name", MAX_NAME_LEN)?;
    validate_optional_text(&data.first_name, "first_name", MAX_NAME_LEN)?;
    validate_optional_text(&data.last_name_kana, "last_name_kana", MAX_NAME_LEN)?;
    validate_optional_text(&data.first_name_kana, "first_name_kana", MAX_NAME_LEN)?;
    validate_optional_text(&data.address, "address", MAX_ADDRESS_LEN)?;
    validate_optional_text(&data.phone, "phone", MAX_SHORT_TEXT_LEN)?;

    // An empty email would collide on the UNIQUE index; treat it as "unchanged"
    if data.email.as_deref() == Some("") {
        data.email = None;
    }
    if let Some(email) = &data.email {
        validate_email(email)?;
    }

    if let Some(wage) = data.daily_wage
        && wage < 0
    {
        return Err(AppError::field(
            ErrorCode::ValueOutOfRange,
            "daily_wage",
            "daily_wage must not be negative",
        ));
    }

    Ok(data)
}

fn profile_not_found(e: RepoError) -> AppError {
    match e {
        RepoError::NotFound(_) => AppError::new(ErrorCode::ProfileNotFound),
        other => other.into(),
    }
}

/// GET /api/profile
pub async fn get(
    State(state): State<ServerState>,
    current_user: CurrentUser,
) -> AppResult<Json<Member>> {
    let member = member::find_by_user(&state.pool, current_user.id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::ProfileNotFound))?;
    Ok(Json(member))
}

/// PUT /api/profile
pub async fn update(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Json(payload): Json<ProfileUpdate>,
) -> AppResult<Json<Member>> {
    let data = normalize_update(payload)?;

    let member = match member::update_profile(&state.pool, current_user.id, &data).await {
        Ok(m) => m,
        Err(RepoError::Duplicate(_)) => {
            return Err(AppError::new(ErrorCode::EmailAlreadyExists)
                .with_detail("email", data.email.clone().unwrap_or_default()));
        }
        Err(e) => return Err(profile_not_found(e)),
    };

    tracing::info!(user_id = current_user.id, "Profile updated");
    Ok(Json(member))
}

/// PUT /api/consultant
pub async fn assign_consultant(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Json(payload): Json<ConsultantAssign>,
) -> AppResult<Json<Member>> {
    let consultant = payload.consultant.trim();
    validate_required_text(consultant, "consultant", MAX_NAME_LEN)?;

    let member = member::set_consultant(&state.pool, current_user.id, consultant)
        .await
        .map_err(profile_not_found)?;

    tracing::info!(user_id = current_user.id, consultant = %consultant, "Consultant assigned");
    Ok(Json(member))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_wage_is_rejected() {
        let err = normalize_update(ProfileUpdate {
            daily_wage: Some(-1),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }

    #[test]
    fn fields_are_trimmed_and_blank_email_ignored() {
        let data = normalize_update(ProfileUpdate {
            last_name: Some("  山田 ".into()),
            email: Some("   ".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(data.last_name.as_deref(), Some("山田"));
        assert!(data.email.is_none());
    }

    #[test]
    fn malformed_email_is_rejected() {
        let err = normalize_update(ProfileUpdate {
            email: Some("not-an-email".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}

//! Authentication Handlers
//!
//! Signup, login and current-user lookup

use axum::{Json, extract::State};
use shared::models::{AuthResponse, LoginRequest, SignupRequest, User};

use crate::auth::{CurrentUser, password};
use crate::core::ServerState;
use crate::db::repository::{RepoError, user};
use crate::security_log;
use crate::utils::validation::{
    MAX_PASSWORD_LEN, MAX_USERNAME_LEN, MIN_PASSWORD_LEN, MIN_USERNAME_LEN, validate_length_range,
};
use crate::utils::{AppError, AppResult, ErrorCode};

/// Letters, digits and `@ . + - _`
fn validate_username(username: &str) -> AppResult<()> {
    validate_length_range(username, "username", MIN_USERNAME_LEN, MAX_USERNAME_LEN)?;
    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || "@.+-_".contains(c))
    {
        return Err(AppError::field(
            ErrorCode::ValidationFailed,
            "username",
            "username may only contain letters, digits and @/./+/-/_",
        ));
    }
    Ok(())
}

fn issue_token(state: &ServerState, user: &User) -> AppResult<String> {
    state
        .get_jwt_service()
        .generate_token(user.id, &user.username, user.is_admin)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))
}

/// POST /api/auth/signup - 注册 (同时创建空的会员资料)
pub async fn signup(
    State(state): State<ServerState>,
    Json(req): Json<SignupRequest>,
) -> AppResult<Json<AuthResponse>> {
    let username = req.username.trim();
    validate_username(username)?;
    validate_length_range(&req.password, "password", MIN_PASSWORD_LEN, MAX_PASSWORD_LEN)?;

    let hash = password::hash_password(&req.password)
        .map_err(|e| AppError::internal(format!("Failed to hash password: {}", e)))?;

    let user = match user::create_with_member(&state.pool, username, &hash, false).await {
        Ok(u) => u,
        Err(RepoError::Duplicate(_)) => {
            return Err(AppError::new(ErrorCode::UsernameTaken).with_detail("username", username));
        }
        Err(e) => return Err(e.into()),
    };

    let token = issue_token(&state, &user)?;
    tracing::info!(user_id = user.id, username = %user.username, "User signed up");

    Ok(Json(AuthResponse { token, user }))
}

/// POST /api/auth/login - 登录
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let username = req.username.trim();
    let creds = user::find_credentials(&state.pool, username).await?;

    // Unified error message to prevent username enumeration
    let Some(creds) = creds else {
        security_log!("WARN", "login_failed", username = username.to_string(), reason = "user_not_found");
        return Err(AppError::invalid_credentials());
    };

    let valid = password::verify_password(&req.password, &creds.password_hash)
        .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;
    if !valid {
        security_log!("WARN", "login_failed", username = username.to_string(), reason = "invalid_password");
        return Err(AppError::invalid_credentials());
    }

    let user = User::from(creds);
    let token = issue_token(&state, &user)?;

    tracing::info!(
        user_id = user.id,
        username = %user.username,
        is_admin = user.is_admin,
        "User logged in successfully"
    );

    Ok(Json(AuthResponse { token, user }))
}

/// GET /api/auth/me - 当前用户
pub async fn me(
    State(state): State<ServerState>,
    current_user: CurrentUser,
) -> AppResult<Json<User>> {
    let user = user::find_by_id(&state.pool, current_user.id)
        .await?
        .ok_or_else(AppError::unauthorized)?;
    Ok(Json(user))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_rules() {
        assert!(validate_username("hanako_01").is_ok());
        assert!(validate_username("はなこ").is_ok());
        assert!(validate_username("a.b+c@d-e").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("has space").is_err());
        assert!(validate_username(&"a".repeat(151)).is_err());
    }
}

//! JWT Extractor
//!
//! Custom extractors for validating JWT tokens in handlers.
//! `CurrentUser` requires a token; `Option<CurrentUser>` accepts anonymous
//! callers but still rejects a token that is present and invalid.

use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::http::request::Parts;

use crate::auth::{CurrentUser, JwtError, JwtService};
use crate::core::ServerState;
use crate::security_log;
use crate::utils::{AppError, AppResult};

impl CurrentUser {
    /// 要求管理员
    pub fn require_admin(&self) -> AppResult<()> {
        if !self.is_admin {
            security_log!(
                "WARN",
                "admin_required",
                user_id = self.id,
                username = self.username.clone()
            );
            return Err(AppError::admin_required());
        }
        Ok(())
    }
}

fn authenticate(parts: &mut Parts, state: &ServerState, token: &str) -> AppResult<CurrentUser> {
    let jwt_service = state.get_jwt_service();
    match jwt_service.validate_token(token) {
        Ok(claims) => {
            let user = CurrentUser::try_from(claims)
                .map_err(|e| AppError::invalid_token(format!("Malformed JWT claims: {}", e)))?;

            // Store in extensions for potential reuse
            parts.extensions.insert(user.clone());

            Ok(user)
        }
        Err(e) => {
            security_log!(
                "WARN",
                "auth_failed",
                error = format!("{}", e),
                uri = format!("{:?}", parts.uri)
            );

            match e {
                JwtError::ExpiredToken => Err(AppError::token_expired()),
                _ => Err(AppError::invalid_token("Invalid token")),
            }
        }
    }
}

fn bearer_token(parts: &Parts) -> AppResult<Option<String>> {
    let Some(header) = parts
        .headers
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
    else {
        return Ok(None);
    };
    JwtService::extract_from_header(header)
        .map(|t| Some(t.to_string()))
        .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))
}

impl FromRequestParts<ServerState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(user.clone());
        }

        match bearer_token(parts)? {
            Some(token) => authenticate(parts, state, &token),
            None => {
                security_log!("WARN", "auth_missing", uri = format!("{:?}", parts.uri));
                Err(AppError::unauthorized())
            }
        }
    }
}

impl OptionalFromRequestParts<ServerState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Option<Self>, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(Some(user.clone()));
        }

        match bearer_token(parts)? {
            Some(token) => authenticate(parts, state, &token).map(Some),
            None => Ok(None),
        }
    }
}

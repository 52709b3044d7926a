//! Spin resolution
//!
//! The eligibility check and the date update are one conditional UPDATE,
//! run in the same transaction as the coupon insert. Of N concurrent
//! resolutions for one user and day, at most one commits.

use chrono::NaiveDate;
use shared::models::SpinResult;
use sqlx::SqlitePool;

use crate::db::repository::{coupon, member};
use crate::rewards::gate::is_winning_label;
use crate::utils::validation::{MAX_SHORT_TEXT_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};

/// Trim and validate an outcome label
pub fn normalize_label(label: &str) -> AppResult<String> {
    let label = label.trim();
    validate_required_text(label, "result", MAX_SHORT_TEXT_LEN)?;
    Ok(label.to_string())
}

/// Resolve today's spin for `user_id` with the given outcome label.
///
/// Fails with `SpinAlreadyUsedToday` (nothing written) when the user already
/// spun on `today`. A winning label issues exactly one unused coupon named
/// after the label.
pub async fn resolve_spin(
    pool: &SqlitePool,
    user_id: i64,
    outcome_label: &str,
    today: NaiveDate,
) -> AppResult<SpinResult> {
    let label = normalize_label(outcome_label)?;

    let mut tx = pool
        .begin()
        .await
        .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

    if !member::claim_roulette_day(&mut tx, user_id, today).await? {
        // dropping tx rolls back
        tracing::info!(user_id, %today, "Spin rejected: already used today");
        return Err(AppError::gate_closed(today));
    }

    let won = is_winning_label(&label);
    let reward = if won {
        Some(coupon::insert(&mut tx, user_id, &label).await?)
    } else {
        None
    };

    tx.commit()
        .await
        .map_err(|e| AppError::database(format!("Failed to commit spin: {e}")))?;

    tracing::info!(user_id, %today, label = %label, won, "Spin resolved");

    Ok(SpinResult { label, won, reward })
}

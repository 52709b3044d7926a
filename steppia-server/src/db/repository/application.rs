//! Application Repository

use super::{RepoError, RepoResult};
use shared::models::{Application, ApplicationWithJob};
use sqlx::SqlitePool;

const APPLICATION_SELECT: &str =
    "SELECT id, user_id, job_id, applied_at, current_step, status FROM application";

/// Apply to a job; re-applying returns the existing row.
///
/// Returns the application and whether it was created by this call.
pub async fn get_or_create(
    pool: &SqlitePool,
    user_id: i64,
    job_id: i64,
) -> RepoResult<(Application, bool)> {
    let now = shared::util::now_millis();
    let id = shared::util::record_id();
    let rows = sqlx::query(
        "INSERT INTO application (id, user_id, job_id, applied_at) VALUES (?1, ?2, ?3, ?4) ON CONFLICT (user_id, job_id) DO NOTHING",
    )
    .bind(id)
    .bind(user_id)
    .bind(job_id)
    .bind(now)
    .execute(pool)
    .await?;
    let created = rows.rows_affected() == 1;

    let sql = format!("{APPLICATION_SELECT} WHERE user_id = ? AND job_id = ?");
    let application = sqlx::query_as::<_, Application>(&sql)
        .bind(user_id)
        .bind(job_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create application".into()))?;

    Ok((application, created))
}

/// Own applications joined with their job, newest first
pub async fn find_by_user(pool: &SqlitePool, user_id: i64) -> RepoResult<Vec<ApplicationWithJob>> {
    let rows = sqlx::query_as::<_, ApplicationWithJob>(
        "SELECT a.id, a.job_id, j.title AS job_title, j.company, a.applied_at, a.current_step, a.status FROM application a JOIN job j ON a.job_id = j.id WHERE a.user_id = ? ORDER BY a.applied_at DESC, a.id DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

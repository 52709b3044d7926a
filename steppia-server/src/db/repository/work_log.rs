//! Work Log Repository

use super::{RepoError, RepoResult};
use chrono::NaiveDate;
use shared::models::{WorkLog, WorkTotals};
use sqlx::SqlitePool;

use crate::work_log::ValidatedWorkLog;

const WORK_LOG_SELECT: &str =
    "SELECT id, user_id, job_id, company_name, work_date, hours, earnings, created_at FROM work_log";

#[derive(sqlx::FromRow)]
struct TotalsRow {
    hours: f64,
    earnings: i64,
}

impl From<TotalsRow> for WorkTotals {
    fn from(r: TotalsRow) -> Self {
        Self {
            hours: r.hours,
            earnings: r.earnings,
        }
    }
}

pub async fn create(pool: &SqlitePool, user_id: i64, data: &ValidatedWorkLog) -> RepoResult<WorkLog> {
    let now = shared::util::now_millis();
    let id = shared::util::record_id();
    let row = sqlx::query_as::<_, WorkLog>(
        "INSERT INTO work_log (id, user_id, job_id, company_name, work_date, hours, earnings, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8) RETURNING id, user_id, job_id, company_name, work_date, hours, earnings, created_at",
    )
    .bind(id)
    .bind(user_id)
    .bind(data.job_id)
    .bind(&data.company_name)
    .bind(data.work_date)
    .bind(data.hours)
    .bind(data.earnings)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// Own logs, newest work date first
pub async fn find_by_user(pool: &SqlitePool, user_id: i64) -> RepoResult<Vec<WorkLog>> {
    let sql = format!("{WORK_LOG_SELECT} WHERE user_id = ? ORDER BY work_date DESC, created_at DESC");
    let rows = sqlx::query_as::<_, WorkLog>(&sql)
        .bind(user_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, user_id: i64, id: i64) -> RepoResult<Option<WorkLog>> {
    let sql = format!("{WORK_LOG_SELECT} WHERE id = ? AND user_id = ?");
    let row = sqlx::query_as::<_, WorkLog>(&sql)
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn update(
    pool: &SqlitePool,
    user_id: i64,
    id: i64,
    data: &ValidatedWorkLog,
) -> RepoResult<WorkLog> {
    let row = sqlx::query_as::<_, WorkLog>(
        "UPDATE work_log SET job_id = ?1, company_name = ?2, work_date = ?3, hours = ?4, earnings = ?5 WHERE id = ?6 AND user_id = ?7 RETURNING id, user_id, job_id, company_name, work_date, hours, earnings, created_at",
    )
    .bind(data.job_id)
    .bind(&data.company_name)
    .bind(data.work_date)
    .bind(data.hours)
    .bind(data.earnings)
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    row.ok_or_else(|| RepoError::NotFound(format!("Work log {id} not found")))
}

pub async fn delete(pool: &SqlitePool, user_id: i64, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM work_log WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

/// Sum of the user's logs for one work date
pub async fn day_totals(pool: &SqlitePool, user_id: i64, date: NaiveDate) -> RepoResult<WorkTotals> {
    let row = sqlx::query_as::<_, TotalsRow>(
        "SELECT CAST(COALESCE(SUM(hours), 0) AS REAL) AS hours, COALESCE(SUM(earnings), 0) AS earnings FROM work_log WHERE user_id = ? AND work_date = ?",
    )
    .bind(user_id)
    .bind(date)
    .fetch_one(pool)
    .await?;
    Ok(row.into())
}

/// Sum of all the user's logs
pub async fn totals(pool: &SqlitePool, user_id: i64) -> RepoResult<WorkTotals> {
    let row = sqlx::query_as::<_, TotalsRow>(
        "SELECT CAST(COALESCE(SUM(hours), 0) AS REAL) AS hours, COALESCE(SUM(earnings), 0) AS earnings FROM work_log WHERE user_id = ?",
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;
    Ok(row.into())
}

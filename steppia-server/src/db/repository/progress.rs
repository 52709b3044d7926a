//! Progress snapshot loader

use super::RepoResult;
use sqlx::SqlitePool;

use crate::progress::ProgressSnapshot;

#[derive(sqlx::FromRow)]
struct SnapshotRow {
    last_name: Option<String>,
    first_name: Option<String>,
    email: Option<String>,
    application_count: i64,
    work_log_count: i64,
    consult_count: i64,
    booking_count: i64,
}

fn filled(v: &Option<String>) -> bool {
    v.as_deref().is_some_and(|s| !s.trim().is_empty())
}

/// Load every fact the tracker needs in one round trip
pub async fn load_snapshot(pool: &SqlitePool, user_id: i64) -> RepoResult<ProgressSnapshot> {
    let row = sqlx::query_as::<_, SnapshotRow>(
        "SELECT \
            (SELECT last_name FROM member WHERE user_id = ?1) AS last_name, \
            (SELECT first_name FROM member WHERE user_id = ?1) AS first_name, \
            (SELECT email FROM member WHERE user_id = ?1) AS email, \
            (SELECT COUNT(*) FROM application WHERE user_id = ?1) AS application_count, \
            (SELECT COUNT(*) FROM work_log WHERE user_id = ?1) AS work_log_count, \
            (SELECT COUNT(*) FROM consult_log WHERE user_id = ?1) AS consult_count, \
            (SELECT COUNT(*) FROM schedule WHERE user_id = ?1 AND kind = 'BOOKING') AS booking_count",
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(ProgressSnapshot {
        has_profile: filled(&row.last_name) && filled(&row.first_name) && filled(&row.email),
        application_count: row.application_count,
        work_log_count: row.work_log_count,
        consult_count: row.consult_count,
        booking_count: row.booking_count,
    })
}

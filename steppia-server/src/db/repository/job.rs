//! Job Repository

use super::RepoResult;
use shared::models::{Job, JobCreate};
use sqlx::SqlitePool;

const JOB_SELECT: &str =
    "SELECT id, title, company, location, salary, description, created_at FROM job";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Job>> {
    let sql = format!("{JOB_SELECT} ORDER BY created_at DESC, id DESC");
    let rows = sqlx::query_as::<_, Job>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Job>> {
    let sql = format!("{JOB_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Job>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: &JobCreate) -> RepoResult<Job> {
    let now = shared::util::now_millis();
    let id = shared::util::record_id();
    let row = sqlx::query_as::<_, Job>(
        "INSERT INTO job (id, title, company, location, salary, description, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) RETURNING id, title, company, location, salary, description, created_at",
    )
    .bind(id)
    .bind(data.title.trim())
    .bind(data.company.trim())
    .bind(data.location.trim())
    .bind(data.salary.trim())
    .bind(&data.description)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

#[cfg(test)]
pub(crate) fn sample(title: &str) -> JobCreate {
    JobCreate {
        title: title.to_string(),
        company: "ステッピア商事".to_string(),
        location: "東京都".to_string(),
        salary: "時給1200円".to_string(),
        description: "40代歓迎".to_string(),
    }
}

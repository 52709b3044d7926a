//! Consultation Repository (templates + logs)

use super::RepoResult;
use shared::models::{ConsultLog, ConsultTemplate};
use sqlx::SqlitePool;

/// All templates in id order (the responder picks the lowest id on ties)
pub async fn find_all_templates(pool: &SqlitePool) -> RepoResult<Vec<ConsultTemplate>> {
    let rows = sqlx::query_as::<_, ConsultTemplate>(
        "SELECT id, question, answer FROM consult_template ORDER BY id ASC",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn create_template(
    pool: &SqlitePool,
    question: &str,
    answer: &str,
) -> RepoResult<ConsultTemplate> {
    let row = sqlx::query_as::<_, ConsultTemplate>(
        "INSERT INTO consult_template (question, answer) VALUES (?1, ?2) RETURNING id, question, answer",
    )
    .bind(question)
    .bind(answer)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn insert_log(
    pool: &SqlitePool,
    user_id: Option<i64>,
    question: &str,
    answer: &str,
) -> RepoResult<ConsultLog> {
    let now = shared::util::now_millis();
    let id = shared::util::record_id();
    let row = sqlx::query_as::<_, ConsultLog>(
        "INSERT INTO consult_log (id, user_id, user_question, ai_response, created_at) VALUES (?1, ?2, ?3, ?4, ?5) RETURNING id, user_id, user_question, ai_response, created_at",
    )
    .bind(id)
    .bind(user_id)
    .bind(question)
    .bind(answer)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// Own logs, newest first
pub async fn find_logs_by_user(pool: &SqlitePool, user_id: i64) -> RepoResult<Vec<ConsultLog>> {
    let rows = sqlx::query_as::<_, ConsultLog>(
        "SELECT id, user_id, user_question, ai_response, created_at FROM consult_log WHERE user_id = ? ORDER BY created_at DESC, id DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support;

    #[tokio::test]
    async fn templates_are_id_ordered() {
        let pool = test_support::pool().await;
        let first = create_template(&pool, "面接のコツ", "笑顔で").await.unwrap();
        let second = create_template(&pool, "面接の服装", "清潔感").await.unwrap();
        let all = find_all_templates(&pool).await.unwrap();
        assert_eq!(all.iter().map(|t| t.id).collect::<Vec<_>>(), vec![first.id, second.id]);
    }

    #[tokio::test]
    async fn anonymous_logs_are_not_listed_for_users() {
        let pool = test_support::pool().await;
        let uid = test_support::user(&pool, "hanako").await;
        insert_log(&pool, None, "匿名の質問", "回答").await.unwrap();
        insert_log(&pool, Some(uid), "私の質問", "回答").await.unwrap();

        let mine = find_logs_by_user(&pool, uid).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].user_question, "私の質問");
    }
}

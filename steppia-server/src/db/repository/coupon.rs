//! Coupon Repository

use super::RepoResult;
use shared::models::Coupon;
use sqlx::{SqliteConnection, SqlitePool};

const COUPON_SELECT: &str = "SELECT id, user_id, prize_name, won_at, is_used FROM coupon";

/// Issue an unused coupon (inside the spin transaction)
pub async fn insert(conn: &mut SqliteConnection, user_id: i64, prize_name: &str) -> RepoResult<Coupon> {
    let now = shared::util::now_millis();
    let id = shared::util::record_id();
    let row = sqlx::query_as::<_, Coupon>(
        "INSERT INTO coupon (id, user_id, prize_name, won_at, is_used) VALUES (?1, ?2, ?3, ?4, 0) RETURNING id, user_id, prize_name, won_at, is_used",
    )
    .bind(id)
    .bind(user_id)
    .bind(prize_name)
    .bind(now)
    .fetch_one(conn)
    .await?;
    Ok(row)
}

/// Own unused coupons, newest first
pub async fn find_unused_by_user(pool: &SqlitePool, user_id: i64) -> RepoResult<Vec<Coupon>> {
    let sql = format!("{COUPON_SELECT} WHERE user_id = ? AND is_used = 0 ORDER BY won_at DESC, id DESC");
    let rows = sqlx::query_as::<_, Coupon>(&sql)
        .bind(user_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(
    conn: &mut SqliteConnection,
    user_id: i64,
    id: i64,
) -> RepoResult<Option<Coupon>> {
    let sql = format!("{COUPON_SELECT} WHERE id = ? AND user_id = ?");
    let row = sqlx::query_as::<_, Coupon>(&sql)
        .bind(id)
        .bind(user_id)
        .fetch_optional(conn)
        .await?;
    Ok(row)
}

/// Consume a coupon; `false` if it is missing, foreign or already used
pub async fn mark_used(conn: &mut SqliteConnection, user_id: i64, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("UPDATE coupon SET is_used = 1 WHERE id = ? AND user_id = ? AND is_used = 0")
        .bind(id)
        .bind(user_id)
        .execute(conn)
        .await?;
    Ok(rows.rows_affected() == 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support;

    #[tokio::test]
    async fn coupon_is_consumed_once() {
        let pool = test_support::pool().await;
        let uid = test_support::user(&pool, "hanako").await;
        let other = test_support::user(&pool, "other").await;

        let mut conn = pool.acquire().await.unwrap();
        let coupon = insert(&mut conn, uid, "カフェ券").await.unwrap();
        assert!(!coupon.is_used);

        assert!(!mark_used(&mut conn, other, coupon.id).await.unwrap());
        assert!(find_by_id(&mut conn, other, coupon.id).await.unwrap().is_none());

        assert!(mark_used(&mut conn, uid, coupon.id).await.unwrap());
        assert!(!mark_used(&mut conn, uid, coupon.id).await.unwrap());
        assert!(find_by_id(&mut conn, uid, coupon.id).await.unwrap().unwrap().is_used);
        drop(conn);

        assert!(find_unused_by_user(&pool, uid).await.unwrap().is_empty());
    }
}

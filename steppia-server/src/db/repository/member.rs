//! Member Repository

use super::{RepoError, RepoResult};
use chrono::NaiveDate;
use shared::models::{Member, ProfileUpdate};
use sqlx::{SqliteConnection, SqlitePool};

const MEMBER_SELECT: &str = "SELECT id, user_id, last_name, first_name, last_name_kana, first_name_kana, address, phone, email, daily_wage, assigned_consultant, last_roulette_date, created_at, updated_at FROM member";

pub async fn find_by_user(pool: &SqlitePool, user_id: i64) -> RepoResult<Option<Member>> {
    let sql = format!("{MEMBER_SELECT} WHERE user_id = ?");
    let row = sqlx::query_as::<_, Member>(&sql)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Partial profile update; `None` fields keep their value.
pub async fn update_profile(
    pool: &SqlitePool,
    user_id: i64,
    data: &ProfileUpdate,
) -> RepoResult<Member> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE member SET last_name = COALESCE(?1, last_name), first_name = COALESCE(?2, first_name), last_name_kana = COALESCE(?3, last_name_kana), first_name_kana = COALESCE(?4, first_name_kana), address = COALESCE(?5, address), phone = COALESCE(?6, phone), email = COALESCE(?7, email), daily_wage = COALESCE(?8, daily_wage), updated_at = ?9 WHERE user_id = ?10",
    )
    .bind(&data.last_name)
    .bind(&data.first_name)
    .bind(&data.last_name_kana)
    .bind(&data.first_name_kana)
    .bind(&data.address)
    .bind(&data.phone)
    .bind(&data.email)
    .bind(data.daily_wage)
    .bind(now)
    .bind(user_id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Member for user {user_id} not found")));
    }
    find_by_user(pool, user_id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Member for user {user_id} not found")))
}

pub async fn set_consultant(pool: &SqlitePool, user_id: i64, consultant: &str) -> RepoResult<Member> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE member SET assigned_consultant = ?1, updated_at = ?2 WHERE user_id = ?3",
    )
    .bind(consultant)
    .bind(now)
    .bind(user_id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Member for user {user_id} not found")));
    }
    find_by_user(pool, user_id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Member for user {user_id} not found")))
}

/// Compare-and-set of the roulette date.
///
/// Moves `last_roulette_date` to `today` only when it is unset or strictly
/// earlier. Returns `false` when the gate was already closed for `today`
/// (or the member does not exist); nothing is written in that case.
pub async fn claim_roulette_day(
    conn: &mut SqliteConnection,
    user_id: i64,
    today: NaiveDate,
) -> RepoResult<bool> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE member SET last_roulette_date = ?1, updated_at = ?2 WHERE user_id = ?3 AND (last_roulette_date IS NULL OR last_roulette_date < ?1)",
    )
    .bind(today)
    .bind(now)
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
    async fn profile_update_is_partial() {
        let pool = test_support::pool().await;
        let uid = test_support::user(&pool, "hanako").await;

        let m = update_profile(
            &pool,
            uid,
            &ProfileUpdate {
                last_name: Some("山田".into()),
                first_name: Some("花子".into()),
                email: Some("hanako@example.com".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert!(m.is_profile_complete());

        let m = update_profile(
            &pool,
            uid,
            &ProfileUpdate {
                daily_wage: Some(6000),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(m.daily_wage, 6000);
        assert_eq!(m.last_name, "山田");
    }

    #[tokio::test]
    async fn email_is_unique_across_members() {
        let pool = test_support::pool().await;
        let a = test_support::user(&pool, "a_user").await;
        let b = test_support::user(&pool, "b_user").await;
        let email = ProfileUpdate {
            email: Some("same@example.com".into()),
            ..Default::default()
        };
        update_profile(&pool, a, &email).await.unwrap();
        let err = update_profile(&pool, b, &email).await.unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }

    #[tokio::test]
    async fn claim_roulette_day_is_once_per_date() {
        let pool = test_support::pool().await;
        let uid = test_support::user(&pool, "hanako").await;
        let d1 = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();

        let mut conn = pool.acquire().await.unwrap();
        assert!(claim_roulette_day(&mut conn, uid, d1).await.unwrap());
        assert!(!claim_roulette_day(&mut conn, uid, d1).await.unwrap());
        // an earlier date never moves the marker backwards
        assert!(
            !claim_roulette_day(&mut conn, uid, NaiveDate::from_ymd_opt(2024, 2, 28).unwrap())
                .await
                .unwrap()
        );
        assert!(claim_roulette_day(&mut conn, uid, d2).await.unwrap());
        drop(conn);

        let m = find_by_user(&pool, uid).await.unwrap().unwrap();
        assert_eq!(m.last_roulette_date, Some(d2));
    }

    #[tokio::test]
    async fn set_consultant_for_missing_member() {
        let pool = test_support::pool().await;
        assert!(matches!(
            set_consultant(&pool, 999, "佐藤").await,
            Err(RepoError::NotFound(_))
        ));
    }
}

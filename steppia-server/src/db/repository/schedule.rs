//! Schedule Repository

use super::RepoResult;
use chrono::NaiveDate;
use shared::models::{Schedule, ScheduleKind};
use sqlx::{SqliteConnection, SqlitePool};

const SCHEDULE_SELECT: &str =
    "SELECT id, user_id, kind, schedule_date, schedule_time, detail, created_at FROM schedule";

pub async fn insert(
    conn: &mut SqliteConnection,
    user_id: i64,
    kind: ScheduleKind,
    date: NaiveDate,
    time: &str,
    detail: &str,
) -> RepoResult<Schedule> {
    let now = shared::util::now_millis();
    let id = shared::util::record_id();
    let row = sqlx::query_as::<_, Schedule>(
        "INSERT INTO schedule (id, user_id, kind, schedule_date, schedule_time, detail, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) RETURNING id, user_id, kind, schedule_date, schedule_time, detail, created_at",
    )
    .bind(id)
    .bind(user_id)
    .bind(kind)
    .bind(date)
    .bind(time)
    .bind(detail)
    .bind(now)
    .fetch_one(conn)
    .await?;
    Ok(row)
}

/// Own entries, latest date/time first; `kind = None` lists everything
pub async fn find_by_user(
    pool: &SqlitePool,
    user_id: i64,
    kind: Option<ScheduleKind>,
) -> RepoResult<Vec<Schedule>> {
    let rows = match kind {
        Some(kind) => {
            let sql = format!(
                "{SCHEDULE_SELECT} WHERE user_id = ? AND kind = ? ORDER BY schedule_date DESC, schedule_time DESC"
            );
            sqlx::query_as::<_, Schedule>(&sql)
                .bind(user_id)
                .bind(kind)
                .fetch_all(pool)
                .await?
        }
        None => {
            let sql = format!(
                "{SCHEDULE_SELECT} WHERE user_id = ? ORDER BY schedule_date DESC, schedule_time DESC"
            );
            sqlx::query_as::<_, Schedule>(&sql)
                .bind(user_id)
                .fetch_all(pool)
                .await?
        }
    };
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support;

    #[tokio::test]
    async fn filter_by_kind() {
        let pool = test_support::pool().await;
        let uid = test_support::user(&pool, "hanako").await;
        let d = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();

        let mut conn = pool.acquire().await.unwrap();
        insert(&mut conn, uid, ScheduleKind::General, d, "09:00", "面接練習")
            .await
            .unwrap();
        let booking = insert(&mut conn, uid, ScheduleKind::Booking, d, "10:00", "佐藤 コンサル予約")
            .await
            .unwrap();
        drop(conn);
        assert_eq!(booking.kind, ScheduleKind::Booking);

        assert_eq!(find_by_user(&pool, uid, None).await.unwrap().len(), 2);
        let bookings = find_by_user(&pool, uid, Some(ScheduleKind::Booking)).await.unwrap();
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].detail, "佐藤 コンサル予約");
        // latest time first
        assert_eq!(find_by_user(&pool, uid, None).await.unwrap()[0].schedule_time, "10:00");
    }
}

//! User Repository

use super::{RepoError, RepoResult};
use shared::models::User;
use sqlx::SqlitePool;

const USER_SELECT: &str = "SELECT id, username, is_admin, created_at FROM users";

/// User row including the password hash (login only)
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserCredentials {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub is_admin: bool,
    pub created_at: i64,
}

impl From<UserCredentials> for User {
    fn from(c: UserCredentials) -> Self {
        Self {
            id: c.id,
            username: c.username,
            is_admin: c.is_admin,
            created_at: c.created_at,
        }
    }
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<User>> {
    let sql = format!("{USER_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, User>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_credentials(
    pool: &SqlitePool,
    username: &str,
) -> RepoResult<Option<UserCredentials>> {
    let row = sqlx::query_as::<_, UserCredentials>(
        "SELECT id, username, password_hash, is_admin, created_at FROM users WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Create a user together with its (empty) member profile in one transaction
pub async fn create_with_member(
    pool: &SqlitePool,
    username: &str,
    password_hash: &str,
    is_admin: bool,
) -> RepoResult<User> {
    let now = shared::util::now_millis();
    let user_id = shared::util::record_id();
    let member_id = shared::util::record_id();

    let mut tx = pool.begin().await?;

    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (id, username, password_hash, is_admin, created_at) VALUES (?1, ?2, ?3, ?4, ?5) RETURNING id, username, is_admin, created_at",
    )
    .bind(user_id)
    .bind(username)
    .bind(password_hash)
    .bind(is_admin)
    .bind(now)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query("INSERT INTO member (id, user_id, created_at, updated_at) VALUES (?1, ?2, ?3, ?3)")
        .bind(member_id)
        .bind(user_id)
        .bind(now)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(user)
}

/// Grant admin to an existing user, or create one.
///
/// Returns `true` when a new account was created.
pub async fn ensure_admin(
    pool: &SqlitePool,
    username: &str,
    password_hash: &str,
) -> RepoResult<bool> {
    let rows = sqlx::query("UPDATE users SET is_admin = 1 WHERE username = ?")
        .bind(username)
        .execute(pool)
        .await?;
    if rows.rows_affected() > 0 {
        return Ok(false);
    }

    match create_with_member(pool, username, password_hash, true).await {
        Ok(_) => Ok(true),
        // lost a race with a concurrent bootstrap
        Err(RepoError::Duplicate(_)) => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::{member, test_support};

    #[tokio::test]
    async fn create_user_also_creates_empty_member() {
        let pool = test_support::pool().await;
        let user = create_with_member(&pool, "hanako", "hash", false)
            .await
            .unwrap();
        assert_eq!(user.username, "hanako");
        assert!(!user.is_admin);

        let member = member::find_by_user(&pool, user.id).await.unwrap().unwrap();
        assert_eq!(member.user_id, user.id);
        assert!(member.last_roulette_date.is_none());
        assert!(!member.is_profile_complete());
    }

    #[tokio::test]
    async fn credentials_lookup() {
        let pool = test_support::pool().await;
        create_with_member(&pool, "hanako", "the-hash", false)
            .await
            .unwrap();
        let creds = find_credentials(&pool, "hanako").await.unwrap().unwrap();
        assert_eq!(creds.password_hash, "the-hash");
        assert!(find_credentials(&pool, "nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn ensure_admin_creates_then_promotes() {
        let pool = test_support::pool().await;
        assert!(ensure_admin(&pool, "root", "h").await.unwrap());
        assert!(!ensure_admin(&pool, "root", "h").await.unwrap());

        let id = test_support::user(&pool, "staff").await;
        assert!(!ensure_admin(&pool, "staff", "h").await.unwrap());
        assert!(find_by_id(&pool, id).await.unwrap().unwrap().is_admin);
    }
}

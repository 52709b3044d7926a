//! Job listing model

use serde::{Deserialize, Serialize};

/// Job listing (求人情報)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub description: String,
    pub created_at: i64,
}

/// Create job payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobCreate {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub description: String,
}

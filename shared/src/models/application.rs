//! Job application & selection progress

use serde::{Deserialize, Serialize};

/// Default status of a fresh application (連絡待ち = awaiting contact)
pub const DEFAULT_APPLICATION_STATUS: &str = "連絡待ち";

/// Fallback consultant name shown when none has been assigned
pub const DEFAULT_CONSULTANT_NAME: &str = "担当コンサルタント";

/// Application row, unique per (user, job)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Application {
    pub id: i64,
    pub user_id: i64,
    pub job_id: i64,
    pub applied_at: i64,
    pub current_step: i64,
    pub status: String,
}

/// Application joined with its job (list views)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ApplicationWithJob {
    pub id: i64,
    pub job_id: i64,
    pub job_title: String,
    pub company: String,
    pub applied_at: i64,
    pub current_step: i64,
    pub status: String,
}

/// Result of applying to a job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyResult {
    pub application: Application,
    /// false when the user had already applied
    pub created: bool,
    pub consultant_name: String,
}

//! AI consultation models

use serde::{Deserialize, Serialize};

/// Stored FAQ template (管理者が登録する定型回答)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ConsultTemplate {
    pub id: i64,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsultTemplateCreate {
    pub question: String,
    pub answer: String,
}

/// Logged question / answer pair
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ConsultLog {
    pub id: i64,
    /// None for anonymous callers
    pub user_id: Option<i64>,
    pub user_question: String,
    pub ai_response: String,
    pub created_at: i64,
}

/// Older clients post the question as `user_input` or `user_text`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsultRequest {
    #[serde(alias = "user_input", alias = "user_text")]
    pub message: String,
}

/// Where an answer came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerSource {
    TemplateExact,
    TemplatePartial,
    Keyword,
    Fallback,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsultResponse {
    pub response: String,
    pub source: AnswerSource,
}

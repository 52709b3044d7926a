//! Member Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Member profile (会員情報), one per user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Member {
    pub id: i64,
    pub user_id: i64,
    pub last_name: String,
    pub first_name: String,
    pub last_name_kana: String,
    pub first_name_kana: String,
    pub address: String,
    pub phone: String,
    pub email: Option<String>,
    /// 賃金日額 (yen)
    pub daily_wage: i64,
    pub assigned_consultant: Option<String>,
    /// Civil date (UTC+9) of the last roulette spin
    pub last_roulette_date: Option<NaiveDate>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Member {
    /// Signup only creates an empty row; the profile counts once the
    /// names and email have been filled in.
    pub fn is_profile_complete(&self) -> bool {
        !self.last_name.trim().is_empty()
            && !self.first_name.trim().is_empty()
            && self.email.as_deref().is_some_and(|e| !e.trim().is_empty())
    }
}

/// Update profile payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name_kana: Option<String>,
    pub first_name_kana: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub daily_wage: Option<i64>,
}

/// Assign consultant payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsultantAssign {
    pub consultant: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank() -> Member {
        Member {
            id: 1,
            user_id: 1,
            last_name: String::new(),
            first_name: String::new(),
            last_name_kana: String::new(),
            first_name_kana: String::new(),
            address: String::new(),
            phone: String::new(),
            email: None,
            daily_wage: 0,
            assigned_consultant: None,
            last_roulette_date: None,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn empty_profile_is_incomplete() {
        assert!(!blank().is_profile_complete());
    }

    #[test]
    fn names_and_email_complete_the_profile() {
        let mut m = blank();
        m.last_name = "山田".into();
        m.first_name = "花子".into();
        assert!(!m.is_profile_complete());

        m.email = Some("  ".into());
        assert!(!m.is_profile_complete());

        m.email = Some("hanako@example.com".into());
        assert!(m.is_profile_complete());
    }
}

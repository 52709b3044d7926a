//! Coupon model

use serde::{Deserialize, Serialize};

/// Coupon issued by a winning roulette spin
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Coupon {
    pub id: i64,
    pub user_id: i64,
    pub prize_name: String,
    pub won_at: i64,
    pub is_used: bool,
}

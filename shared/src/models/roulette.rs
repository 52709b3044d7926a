//! Roulette (Spin Gate) models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Coupon;

/// One wheel segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelSegment {
    pub label: String,
    /// Relative draw weight
    pub weight: u32,
}

/// Roulette page state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouletteStatus {
    pub can_spin: bool,
    pub today: NaiveDate,
    pub wheel: Vec<WheelSegment>,
}

/// Spin payload; without a label the server draws from the wheel
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpinRequest {
    pub result: Option<String>,
}

/// Resolved spin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpinResult {
    pub label: String,
    pub won: bool,
    /// Coupon issued on a win
    pub reward: Option<Coupon>,
}

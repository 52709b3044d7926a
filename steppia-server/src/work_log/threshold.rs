//! Work-log threshold rules
//!
//! Evaluated over the totals of one user's logs for one work date,
//! right after a log for that date has been saved.

use std::fmt;
use std::str::FromStr;

use shared::models::WorkTotals;

/// Earnings cap (yen) for [`ThresholdRule::FixedCap`]
pub const FIXED_EARNINGS_CAP: i64 = 4000;

/// Hours cap for [`ThresholdRule::FixedCap`] (strictly greater warns)
pub const FIXED_HOURS_CAP: f64 = 2.0;

/// Share of the daily wage for [`ThresholdRule::DailyWageRatio`]
pub const DAILY_WAGE_RATIO_PERCENT: i64 = 80;

/// Named threshold rule, selected by configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThresholdRule {
    /// earnings >= ¥4000 or hours > 2.0
    #[default]
    FixedCap,
    /// earnings >= 80% of the member's daily wage
    DailyWageRatio,
}

impl ThresholdRule {
    /// Whether the day totals should trigger the warning.
    ///
    /// `daily_wage` is only read by [`ThresholdRule::DailyWageRatio`]; a
    /// wage of 0 (not entered) never warns.
    pub fn should_warn(&self, totals: &WorkTotals, daily_wage: i64) -> bool {
        match self {
            ThresholdRule::FixedCap => {
                totals.earnings >= FIXED_EARNINGS_CAP || totals.hours > FIXED_HOURS_CAP
            }
            ThresholdRule::DailyWageRatio => {
                daily_wage > 0
                    && totals.earnings.saturating_mul(100)
                        >= daily_wage.saturating_mul(DAILY_WAGE_RATIO_PERCENT)
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThresholdRule::FixedCap => "fixed",
            ThresholdRule::DailyWageRatio => "daily_wage",
        }
    }
}

impl fmt::Display for ThresholdRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThresholdRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" | "fixed_cap" => Ok(ThresholdRule::FixedCap),
            "daily_wage" | "daily_wage_ratio" => Ok(ThresholdRule::DailyWageRatio),
            other => Err(format!("Unknown work log threshold rule: {other}")),
        }
    }
}

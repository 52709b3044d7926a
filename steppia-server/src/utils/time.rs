//! 时间工具函数: 业务时区 (UTC+9)
//!
//! "今天" 一律按 UTC+9 的自然日计算，与服务器本地时区无关。
//! 通过 [`Clock`] 注入，测试中使用 [`FixedClock`]。

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, Utc};

use super::{AppError, AppResult};

/// 业务时区偏移 (秒)，日本标准时间
pub const BUSINESS_UTC_OFFSET_SECS: i32 = 9 * 3600;

/// 某一时刻在业务时区下的自然日
pub fn business_date(instant: DateTime<Utc>) -> NaiveDate {
    match FixedOffset::east_opt(BUSINESS_UTC_OFFSET_SECS) {
        Some(tz) => instant.with_timezone(&tz).date_naive(),
        None => (instant + Duration::seconds(BUSINESS_UTC_OFFSET_SECS.into())).date_naive(),
    }
}

/// 时钟抽象
pub trait Clock: Send + Sync {
    /// 当前业务日期
    fn today(&self) -> NaiveDate;
}

/// 系统时钟
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        business_date(Utc::now())
    }
}

/// 固定日期时钟 (测试用)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// 解析时刻字符串 (HH:MM)，返回规范化的 `HH:MM`
pub fn parse_time(time: &str) -> AppResult<String> {
    NaiveTime::parse_from_str(time.trim(), "%H:%M")
        .map(|t| t.format("%H:%M").to_string())
        .map_err(|_| AppError::validation(format!("Invalid time format: {}", time)))
}

//! My page aggregate

use serde::{Deserialize, Serialize};

use super::{ApplicationWithJob, ConsultLog, Coupon, Schedule};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MyPage {
    pub consultant_name: String,
    pub consult_logs: Vec<ConsultLog>,
    pub bookings: Vec<Schedule>,
    pub applications: Vec<ApplicationWithJob>,
    pub coupons: Vec<Coupon>,
}

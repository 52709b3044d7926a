//! 工时记录 - 输入解析与阈值提醒
//!
//! - [`input`] - 表单输入 → 校验后的记录
//! - [`threshold`] - 同日合计的提醒规则

pub mod input;
pub mod threshold;

pub use input::{ValidatedWorkLog, parse_work_log_input};
pub use threshold::ThresholdRule;

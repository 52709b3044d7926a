//! 奖励转盘 - 每日抽奖闸门
//!
//! - [`gate`] - 纯函数: 今天能否抽、结果是否中奖
//! - [`wheel`] - 服务端转盘与加权抽取
//! - [`service`] - 事务内的闸门检查 + 优惠券发放

pub mod gate;
pub mod service;
pub mod wheel;

pub use gate::{WINNING_MARKERS, can_spin, is_winning_label};
pub use service::{normalize_label, resolve_spin};
pub use wheel::Wheel;

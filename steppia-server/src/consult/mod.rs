//! AI 咨询与预约
//!
//! - [`faq`] - 静态关键词表
//! - [`responder`] - 模板 → 关键词 → 兜底 的应答优先级
//! - [`booking`] - 咨询预约 (可使用优惠券)

pub mod booking;
pub mod faq;
pub mod responder;

pub use booking::{book_consultation, resolve_consultant};
pub use responder::{FALLBACK_ANSWER, respond};

//! Data models
//!
//! Shared between the server and API clients.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` record ids (see [`crate::util::record_id`]).

pub mod application;
pub mod consult;
pub mod coupon;
pub mod job;
pub mod member;
pub mod mypage;
pub mod progress;
pub mod roulette;
pub mod schedule;
pub mod user;
pub mod work_log;

// Re-exports
pub use application::*;
pub use consult::*;
pub use coupon::*;
pub use job::*;
pub use member::*;
pub use mypage::*;
pub use progress::*;
pub use roulette::*;
pub use schedule::*;
pub use user::*;
pub use work_log::*;

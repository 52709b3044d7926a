//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 注册、登录
//! - [`profile`] - 会员资料、担当顾问
//! - [`jobs`] - 求职信息、应聘
//! - [`applications`] - 我的应聘
//! - [`work_logs`] - 工时记录
//! - [`consult`] - AI 咨询
//! - [`roulette`] - 每日转盘
//! - [`progress`] - 进度追踪
//! - [`schedules`] - 日程与咨询预约
//! - [`coupons`] - 优惠券
//! - [`mypage`] - 我的页面

pub mod applications;
pub mod auth;
pub mod consult;
pub mod coupons;
pub mod health;
pub mod jobs;
pub mod mypage;
pub mod profile;
pub mod progress;
pub mod roulette;
pub mod schedules;
pub mod work_logs;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Health API - public route
        .merge(health::router())
        // Auth API - signup / login public, me requires token
        .merge(auth::router())
        // Member API - authentication required
        .merge(profile::router())
        .merge(applications::router())
        .merge(work_logs::router())
        .merge(roulette::router())
        .merge(progress::router())
        .merge(schedules::router())
        .merge(coupons::router())
        .merge(mypage::router())
        // Jobs: list public, create admin, apply authenticated
        .merge(jobs::router())
        // Consult: anonymous allowed
        .merge(consult::router())
}

/// Build a fully configured application with all middleware
///
/// Authentication is done per handler through the `CurrentUser` extractor.
pub fn build_app() -> Router<ServerState> {
    build_router()
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
}

//! Schedule API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/schedules | GET | 我的全部日程 |
//! | /api/schedules | POST | 新增一般日程 (GENERAL) |
//! | /api/bookings | GET | 我的咨询预约 (BOOKING) |
//! | /api/bookings | POST | 预约咨询 (可使用优惠券) |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .nest("/api/schedules", schedule_routes())
        .nest("/api/bookings", booking_routes())
}

fn schedule_routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::list).post(handler::create))
}

fn booking_routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::list_bookings).post(handler::book))
}

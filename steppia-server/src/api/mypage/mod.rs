//! My Page API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/mypage | GET | 咨询记录、预约、应聘、优惠券、担当顾问 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/mypage", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::get))
}

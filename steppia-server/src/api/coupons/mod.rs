//! Coupon API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/coupons | GET | 我的未使用优惠券 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/coupons", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::list))
}

//! Profile API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/profile | GET | 我的会员资料 |
//! | /api/profile | PUT | 部分更新资料 |
//! | /api/consultant | PUT | 选择担当顾问 |

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .nest("/api/profile", routes())
        .route("/api/consultant", put(handler::assign_consultant))
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::get).put(handler::update))
}

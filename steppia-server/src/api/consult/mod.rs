//! Consult API 模块
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /api/consult | POST | 提问 (匿名亦可) | 可选 |
//! | /api/consult/history | GET | 我的咨询记录 | 会员 |
//! | /api/consult/templates | POST | 新增定型回答 | 管理员 |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/consult", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::ask))
        .route("/history", get(handler::history))
        .route("/templates", post(handler::create_template))
}

//! Jobs API 模块
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /api/jobs | GET | 求职信息列表 | 无 |
//! | /api/jobs | POST | 发布求职信息 | 管理员 |
//! | /api/jobs/{id} | GET | 求职详情 | 无 |
//! | /api/jobs/{id}/apply | POST | 应聘 (幂等) | 会员 |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/jobs", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/apply", post(handler::apply))
}

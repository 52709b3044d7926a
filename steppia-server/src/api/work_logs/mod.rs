//! Work Log API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/work-logs | GET | 列表 + 合计 |
//! | /api/work-logs | POST | 新增 (返回当日合计与警告) |
//! | /api/work-logs/{id} | GET/PUT/DELETE | 单条读取 / 编辑 / 删除 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/work-logs", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}

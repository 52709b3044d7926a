//! Applications API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/applications | GET | 我的应聘 (含职位信息) |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/applications", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::list))
}

//! Progress API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/progress | GET | 里程碑步骤 + 冒险地图 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/progress", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::get))
}

//! Roulette API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/roulette | GET | 今天能否抽 + 转盘配置 |
//! | /api/roulette/spin | POST | 抽奖 (每个业务日一次) |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/roulette", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::status))
        .route("/spin", post(handler::spin))
}

//! Steppia Server - 求职者支援服务
//!
//! # 架构概述
//!
//! - **奖励转盘** (`rewards`): 每个自然日 (UTC+9) 一次的抽奖闸门 + 优惠券发放
//! - **进度追踪** (`progress`): 里程碑步骤 + 冒险地图
//! - **工时记录** (`work_log`): 收入 / 工时阈值提醒
//! - **AI 咨询** (`consult`): 模板 + 关键词 FAQ 应答
//! - **数据库** (`db`): SQLite (sqlx) 连接池与 repository
//! - **认证** (`auth`): JWT + Argon2
//! - **HTTP API** (`api`): JSON 接口
//!
//! # 模块结构
//!
//! ```text
//! steppia-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # JWT 认证、密码
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层
//! ├── rewards/       # 转盘闸门
//! ├── progress/      # 进度追踪
//! ├── consult/       # FAQ 应答
//! ├── work_log/      # 阈值规则、输入解析
//! └── utils/         # 日志、时间、校验
//! ```

pub mod api;
pub mod auth;
pub mod consult;
pub mod core;
pub mod db;
pub mod progress;
pub mod rewards;
pub mod utils;
pub mod work_log;

// Re-export 公共类型
pub use api::{build_app, build_router};
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// 设置运行环境: 加载 `.env`，初始化日志
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    // .env 文件可选
    let _ = dotenv::dotenv();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    if let Some(dir) = &log_dir {
        std::fs::create_dir_all(dir)?;
    }
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

use crate::auth::JwtConfig;
use crate::utils::{AppError, AppResult, ErrorCode};
use crate::work_log::ThresholdRule;

/// 启动时创建的管理员账号
#[derive(Debug, Clone)]
pub struct AdminBootstrap {
    pub username: String,
    pub password: String,
}

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | DATABASE_PATH | steppia.db | SQLite 文件路径 |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | JWT_SECRET | (开发环境随机) | JWT 密钥, 非开发环境必填 |
/// | JWT_EXPIRATION_MINUTES | 1440 | 令牌有效期 |
/// | WORK_LOG_THRESHOLD_RULE | fixed | `fixed` / `daily_wage` |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | - | 日志目录 (按天滚动) |
/// | ADMIN_USERNAME / ADMIN_PASSWORD | - | 启动时创建管理员 |
///
/// # 示例
///
/// ```ignore
/// DATABASE_PATH=/data/steppia.db HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite 数据库文件
    pub database_path: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// JWT 认证配置
    pub jwt: JwtConfig,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 工时提醒规则
    pub work_log_rule: ThresholdRule,
    /// 日志级别
    pub log_level: String,
    /// 日志目录
    pub log_dir: Option<String>,
    /// 管理员初始化
    pub admin: Option<AdminBootstrap>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值。
    /// 规则名无法识别或生产环境缺少 JWT 密钥时返回 ConfigError。
    pub fn from_env() -> AppResult<Self> {
        let environment =
            std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let jwt = JwtConfig::from_env(environment == "development")
            .map_err(|e| AppError::with_message(ErrorCode::ConfigError, e.to_string()))?;

        let work_log_rule = match std::env::var("WORK_LOG_THRESHOLD_RULE") {
            Ok(name) => name
                .parse()
                .map_err(|e: String| AppError::with_message(ErrorCode::ConfigError, e))?,
            Err(_) => ThresholdRule::default(),
        };

        let admin = match (
            std::env::var("ADMIN_USERNAME").ok(),
            std::env::var("ADMIN_PASSWORD").ok(),
        ) {
            (Some(username), Some(password)) => Some(AdminBootstrap { username, password }),
            _ => None,
        };

        Ok(Self {
            database_path: std::env::var("DATABASE_PATH").unwrap_or_else(|_| "steppia.db".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            jwt,
            environment,
            work_log_rule,
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            admin,
        })
    }

    /// 使用自定义值构造配置, 不读环境变量
    ///
    /// 常用于测试场景
    pub fn with_overrides(database_path: impl Into<String>, http_port: u16) -> Self {
        Self {
            database_path: database_path.into(),
            http_port,
            jwt: JwtConfig::default(),
            environment: "development".into(),
            work_log_rule: ThresholdRule::default(),
            log_level: "info".into(),
            log_dir: None,
            admin: None,
        }
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_use_development_defaults() {
        let config = Config::with_overrides(":memory:", 0);
        assert!(config.is_development());
        assert_eq!(config.work_log_rule, ThresholdRule::FixedCap);
        assert!(config.jwt.secret.len() >= crate::auth::jwt::MIN_SECRET_LEN);
        assert!(config.admin.is_none());
    }
}

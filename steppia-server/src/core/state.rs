use std::sync::Arc;

use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::auth::{JwtService, password};
use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::user;
use crate::rewards::Wheel;
use crate::utils::time::{Clock, SystemClock};
use crate::utils::{AppError, AppResult};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，每个请求 clone 一份。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | pool | SqlitePool | SQLite 连接池 |
/// | jwt_service | Arc<JwtService> | JWT 认证服务 |
/// | clock | Arc<dyn Clock> | 业务日期 (UTC+9) |
/// | wheel | Arc<Wheel> | 转盘配置 |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub pool: SqlitePool,
    pub jwt_service: Arc<JwtService>,
    pub clock: Arc<dyn Clock>,
    pub wheel: Arc<Wheel>,
}

impl ServerState {
    /// 组装状态 (不做 IO)
    pub fn new(config: Config, pool: SqlitePool, clock: Arc<dyn Clock>) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        Self {
            config,
            pool,
            jwt_service,
            clock,
            wheel: Arc::new(Wheel::default()),
        }
    }

    /// 打开数据库、执行迁移、初始化管理员账号
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let db = DbService::new(&config.database_path).await?;
        let state = Self::new(config.clone(), db.pool, Arc::new(SystemClock));
        state.bootstrap_admin().await?;
        Ok(state)
    }

    async fn bootstrap_admin(&self) -> AppResult<()> {
        let Some(admin) = &self.config.admin else {
            return Ok(());
        };
        let hash = password::hash_password(&admin.password)
            .map_err(|e| AppError::internal(format!("Failed to hash admin password: {e}")))?;
        let created = user::ensure_admin(&self.pool, &admin.username, &hash).await?;
        if created {
            tracing::info!(username = %admin.username, "Admin account created");
        } else {
            tracing::info!(username = %admin.username, "Admin account already present");
        }
        Ok(())
    }

    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    /// 当前业务日期
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}

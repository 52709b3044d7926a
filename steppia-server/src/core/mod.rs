//! 核心模块 - 服务器配置、状态
//!
//! # 模块结构
//!
//! - [`Config`] - 服务器配置
//! - [`ServerState`] - 服务器状态
//! - [`Server`] - HTTP 服务器

pub mod config;
pub mod server;
pub mod state;

pub use config::{AdminBootstrap, Config};
pub use server::Server;
pub use state::ServerState;

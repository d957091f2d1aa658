//! Billing Console Core - 支付后台管理的业务核心
//!
//! # 架构概述
//!
//! The admin dashboard of the billing platform renders everything it shows
//! from this crate:
//!
//! - **权限** (`auth`): permission catalog, built-in roles, authentication
//! - **角色** (`roles`): role store behind a repository trait
//! - **用户** (`users`): user directory with role/status filters
//! - **预支** (`anticipation`): receivables anticipation fee simulation
//! - **配置** (`core`): environment configuration
//!
//! # 模块结构
//!
//! ```text
//! billing-console/src/
//! ├── core/          # 配置
//! ├── auth/          # 权限目录、认证、当前用户
//! ├── roles/         # 角色存储
//! ├── users/         # 用户目录
//! ├── anticipation/  # 金额解析、期限、费率计算
//! └── utils/         # 日志、错误
//! ```

pub mod anticipation;
pub mod auth;
pub mod core;
pub mod roles;
pub mod users;
pub mod utils;

// Re-export 公共类型
pub use anticipation::AnticipationSimulator;
pub use auth::{Authenticator, CredentialAuthenticator, CurrentUser, Session};
pub use core::Config;
pub use roles::{InMemoryRoleStore, RoleStore};
pub use users::{InMemoryUserStore, UserStore};
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

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

/// 设置运行环境：加载 .env、读取配置、初始化日志
pub fn setup_environment() -> AppResult<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env()?;
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    Ok(config)
}

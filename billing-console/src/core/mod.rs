//! 核心模块 - 控制台配置
//!
//! - [`Config`] - 环境配置
//! - [`AnticipationConfig`] - 预支模拟配置

pub mod config;

pub use config::{AnticipationConfig, Config, parse_fee_rate_cap};

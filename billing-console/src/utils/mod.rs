//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型 (from shared::error)
//! - 日志

pub mod logger;

pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};

//! 工具模块 - 通用工具函数
//!
//! - 日志初始化
//! - 输入校验
//! - 金额格式化

pub mod format;
pub mod logger;
pub mod validation;

pub use format::format_amount;
pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};

//! Supplier billing reconciliation - 供应商月度对账
//!
//! # 架构概述
//!
//! - **对账** (`reconciliation`): 订单按 月 → 供应商 分组、汇总应付金额、付款确认
//! - **金额** (`money`): 基于 `rust_decimal` 的精确金额计算
//! - **配置** (`core`): 环境变量配置
//! - **工具** (`utils`): 日志、校验、金额格式化
//!
//! # 模块结构
//!
//! ```text
//! billing/src/
//! ├── core/            # 配置、运行环境
//! ├── reconciliation/  # 聚合、确认、存储、订单来源
//! ├── utils/           # 日志、校验、格式化
//! └── money.rs         # 金额计算
//! ```

pub mod core;
pub mod money;
pub mod reconciliation;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, setup_environment};
pub use reconciliation::{
    BillingBoard, ConfirmationSet, ConfirmationStore, InMemoryConfirmationStore,
    JsonFileConfirmationStore, JsonFileOrderSource, OrderSource, aggregate, confirm_payment,
    reconcile, reconcile_strict,
};
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

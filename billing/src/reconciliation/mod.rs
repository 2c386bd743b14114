//! 供应商对账 (Supplier Reconciliation)
//!
//! # 数据流
//!
//! ```text
//! OrderSource ──► orders ──┐
//!                          ├──► aggregate / reconcile ──► MonthlyBill[] (+ rejected, summary)
//! ConfirmationStore ──► ConfirmationSet ──┘
//!        ▲
//!        └── confirm_payment (唯一写入口, Unpaid → Paid)
//! ```
//!
//! - [`aggregator`]: 纯函数聚合，按月倒序、按供应商名排序
//! - [`confirmations`]: 不可变、带版本号的付款确认集合
//! - [`store`]: 确认存储 (内存 / JSON 文件)
//! - [`source`]: 订单来源
//! - [`board`]: 缓存聚合结果
//! - [`summary`]: 已付 / 待付汇总

pub mod aggregator;
pub mod board;
pub mod confirmations;
pub mod source;
pub mod store;
pub mod summary;

pub use aggregator::{aggregate, billing_month_of, compare_supplier_names, reconcile, reconcile_strict};
pub use board::BillingBoard;
pub use confirmations::{ConfirmationSet, confirm_payment};
pub use source::{JsonFileOrderSource, OrderSource};
pub use store::{ConfirmationStore, InMemoryConfirmationStore, JsonFileConfirmationStore};
pub use summary::{pending_payments, summarize, summarize_month};

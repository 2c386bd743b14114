//! Shared types for the supplier billing workspace
//!
//! Billing models (orders, confirmations, derived bills) and the unified
//! error system used by every crate in the workspace.

pub mod billing;
pub mod error;

// Re-exports
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};

pub use billing::{
    BillingMonth, BillingReport, ConfirmationKey, MonthlyBill, OrderRecord, PaymentConfirmation,
    RejectedOrder, SettlementSummary, SupplierBill,
};
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

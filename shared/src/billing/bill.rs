//! Derived billing views (月度账单)
//!
//! These are never persisted; they are rebuilt from orders and
//! confirmations every time.

use super::confirmation::PaymentConfirmation;
use super::month::BillingMonth;
use super::order::OrderRecord;
use crate::error::ErrorCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All orders of one supplier within one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierBill {
    pub supplier_name: String,
    /// Orders in input order
    pub orders: Vec<OrderRecord>,
    /// Sum of `orders[].supplier_amount`
    pub total_supplier_payable: Decimal,
    pub is_paid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_number: Option<String>,
}

impl SupplierBill {
    /// Copy confirmation fields onto the bill
    pub fn apply_confirmation(&mut self, confirmation: Option<&PaymentConfirmation>) {
        match confirmation {
            Some(c) => {
                self.is_paid = true;
                self.paid_at = Some(c.paid_at.clone());
                self.transaction_number = Some(c.transaction_number.clone());
            }
            None => {
                self.is_paid = false;
                self.paid_at = None;
                self.transaction_number = None;
            }
        }
    }
}

/// One billing month with its supplier bills
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBill {
    pub month: BillingMonth,
    /// Sorted by supplier name, ascending
    pub suppliers: Vec<SupplierBill>,
    /// Sum of `suppliers[].total_supplier_payable`
    pub total_supplier_payable: Decimal,
}

impl MonthlyBill {
    pub fn supplier(&self, supplier_name: &str) -> Option<&SupplierBill> {
        self.suppliers
            .iter()
            .find(|s| s.supplier_name == supplier_name)
    }

    pub fn order_count(&self) -> usize {
        self.suppliers.iter().map(|s| s.orders.len()).sum()
    }
}

/// Paid / outstanding breakdown shown in the reconciliation header
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementSummary {
    pub supplier_bill_count: usize,
    pub paid_bill_count: usize,
    pub unpaid_bill_count: usize,
    pub order_count: usize,
    pub total_payable: Decimal,
    pub paid_amount: Decimal,
    pub outstanding_amount: Decimal,
}

/// An order left out of the bills, with the reason
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectedOrder {
    pub order: OrderRecord,
    pub code: ErrorCode,
    pub reason: String,
}

/// Full reconciliation output: bills plus the orders that could not be billed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingReport {
    /// Sorted by month, most recent first
    pub months: Vec<MonthlyBill>,
    pub rejected: Vec<RejectedOrder>,
    pub summary: SettlementSummary,
}

impl BillingReport {
    pub fn month(&self, month: BillingMonth) -> Option<&MonthlyBill> {
        self.months.iter().find(|m| m.month == month)
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

//! 月度对账聚合
//!
//! Flat orders → `month → supplier → orders`, with payable totals at each
//! level. Pure: the output depends only on the two inputs.

use super::confirmations::ConfirmationSet;
use super::summary::summarize;
use crate::money::{sum_amounts, validate_supplier_amount};
use shared::billing::{BillingMonth, BillingReport, MonthlyBill, OrderRecord, RejectedOrder, SupplierBill};
use shared::error::{AppError, AppResult, ErrorCode};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

/// Supplier name collation used for bill ordering.
///
/// Case-folded Unicode scalar order, ties broken by raw scalar order, so
/// `"agoda" < "Booking" < "booking"` and `携程` (U+643A) sorts before
/// `道旅` (U+9053).
pub fn compare_supplier_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}

/// Billing month of an order, after validating the fields billing relies on
pub fn billing_month_of(order: &OrderRecord) -> AppResult<BillingMonth> {
    if order.supplier_name.trim().is_empty() {
        return Err(AppError::new(ErrorCode::OrderSupplierMissing)
            .with_detail("order_id", order.order_id.clone()));
    }
    validate_supplier_amount(order.supplier_amount)
        .map_err(|e| e.with_detail("order_id", order.order_id.clone()))?;
    BillingMonth::from_check_out_date(&order.check_out_date)
        .map_err(|e| e.with_detail("order_id", order.order_id.clone()))
}

/// Group orders into monthly bills.
///
/// Months are sorted most recent first, suppliers by
/// [`compare_supplier_names`]. Orders that fail [`billing_month_of`] are
/// left out; use [`reconcile`] to get them back.
pub fn aggregate(orders: &[OrderRecord], confirmations: &ConfirmationSet) -> Vec<MonthlyBill> {
    build(orders, confirmations).0
}

/// [`aggregate`] plus the rejected orders and the settlement summary
pub fn reconcile(orders: &[OrderRecord], confirmations: &ConfirmationSet) -> BillingReport {
    let (months, rejected) = build(orders, confirmations);
    let summary = summarize(&months);
    BillingReport {
        months,
        rejected,
        summary,
    }
}

/// Like [`reconcile`], but the first invalid order fails the whole run
pub fn reconcile_strict(
    orders: &[OrderRecord],
    confirmations: &ConfirmationSet,
) -> AppResult<BillingReport> {
    for order in orders {
        billing_month_of(order)?;
    }
    Ok(reconcile(orders, confirmations))
}

fn build(
    orders: &[OrderRecord],
    confirmations: &ConfirmationSet,
) -> (Vec<MonthlyBill>, Vec<RejectedOrder>) {
    let mut grouped: BTreeMap<BillingMonth, HashMap<&str, Vec<&OrderRecord>>> = BTreeMap::new();
    let mut rejected = Vec::new();

    for order in orders {
        match billing_month_of(order) {
            Ok(month) => grouped
                .entry(month)
                .or_default()
                .entry(order.supplier_name.as_str())
                .or_default()
                .push(order),
            Err(e) => {
                tracing::warn!(
                    order_id = %order.order_id,
                    code = %e.code,
                    "Order excluded from billing: {}",
                    e.message
                );
                rejected.push(RejectedOrder {
                    order: order.clone(),
                    code: e.code,
                    reason: e.message,
                });
            }
        }
    }

    let months: Vec<MonthlyBill> = grouped
        .into_iter()
        .rev()
        .map(|(month, suppliers)| monthly_bill(month, suppliers, confirmations))
        .collect();

    tracing::debug!(
        orders = orders.len(),
        months = months.len(),
        rejected = rejected.len(),
        "Billing aggregated"
    );

    (months, rejected)
}

fn monthly_bill(
    month: BillingMonth,
    suppliers: HashMap<&str, Vec<&OrderRecord>>,
    confirmations: &ConfirmationSet,
) -> MonthlyBill {
    let mut bills: Vec<SupplierBill> = suppliers
        .into_iter()
        .map(|(name, orders)| supplier_bill(month, name, orders, confirmations))
        .collect();
    bills.sort_by(|a, b| compare_supplier_names(&a.supplier_name, &b.supplier_name));

    let total_supplier_payable = sum_amounts(bills.iter().map(|b| &b.total_supplier_payable));

    MonthlyBill {
        month,
        suppliers: bills,
        total_supplier_payable,
    }
}

fn supplier_bill(
    month: BillingMonth,
    supplier_name: &str,
    orders: Vec<&OrderRecord>,
    confirmations: &ConfirmationSet,
) -> SupplierBill {
    let total_supplier_payable = sum_amounts(orders.iter().map(|o| &o.supplier_amount));
    let mut bill = SupplierBill {
        supplier_name: supplier_name.to_string(),
        orders: orders.into_iter().cloned().collect(),
        total_supplier_payable,
        is_paid: false,
        paid_at: None,
        transaction_number: None,
    };
    bill.apply_confirmation(confirmations.get_for(month, supplier_name));
    bill
}

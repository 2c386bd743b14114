//! 结算汇总 - 已付 / 待付统计

use crate::money::sum_amounts;
use shared::billing::{BillingMonth, MonthlyBill, SettlementSummary, SupplierBill};

/// Paid / outstanding breakdown for one month
pub fn summarize_month(bill: &MonthlyBill) -> SettlementSummary {
    summarize(std::slice::from_ref(bill))
}

/// Paid / outstanding breakdown across all months
pub fn summarize(months: &[MonthlyBill]) -> SettlementSummary {
    let bills: Vec<&SupplierBill> = months.iter().flat_map(|m| m.suppliers.iter()).collect();
    let paid: Vec<&SupplierBill> = bills.iter().copied().filter(|b| b.is_paid).collect();

    let total_payable = sum_amounts(months.iter().map(|m| &m.total_supplier_payable));
    let paid_amount = sum_amounts(paid.iter().map(|b| &b.total_supplier_payable));

    SettlementSummary {
        supplier_bill_count: bills.len(),
        paid_bill_count: paid.len(),
        unpaid_bill_count: bills.len() - paid.len(),
        order_count: bills.iter().map(|b| b.orders.len()).sum(),
        total_payable,
        paid_amount,
        outstanding_amount: total_payable - paid_amount,
    }
}

/// Supplier bills still awaiting payment, most recent month first.
///
/// These are the rows for which the display layer offers "confirm payment".
pub fn pending_payments(months: &[MonthlyBill]) -> Vec<(BillingMonth, &SupplierBill)> {
    months
        .iter()
        .flat_map(|m| {
            m.suppliers
                .iter()
                .filter(|s| !s.is_paid)
                .map(move |s| (m.month, s))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reconciliation::{ConfirmationSet, aggregate};
    use rust_decimal::Decimal;
    use shared::billing::OrderRecord;

    fn orders() -> Vec<OrderRecord> {
        vec![
            OrderRecord::new("A", "2025-01-15", Decimal::new(120050, 2), "道旅"),
            OrderRecord::new("B", "2025-01-28", Decimal::new(80075, 2), "道旅"),
            OrderRecord::new("C", "2025-01-20", Decimal::new(90000, 2), "携程"),
            OrderRecord::new("D", "2024-12-30", Decimal::new(50000, 2), "携程"),
        ]
    }

    #[test]
    fn test_summary_all_unpaid() {
        let bills = aggregate(&orders(), &ConfirmationSet::new());
        let summary = summarize(&bills);

        assert_eq!(summary.supplier_bill_count, 3);
        assert_eq!(summary.paid_bill_count, 0);
        assert_eq!(summary.unpaid_bill_count, 3);
        assert_eq!(summary.order_count, 4);
        assert_eq!(summary.total_payable, Decimal::new(340125, 2));
        assert_eq!(summary.paid_amount, Decimal::ZERO);
        assert_eq!(summary.outstanding_amount, Decimal::new(340125, 2));
    }

    #[test]
    fn test_summary_with_payment() {
        let confirmations = ConfirmationSet::new()
            .confirm_payment("2025-01".parse().unwrap(), "道旅", "2025-02-05", "TXN1")
            .unwrap();
        let bills = aggregate(&orders(), &confirmations);

        let summary = summarize(&bills);
        assert_eq!(summary.paid_bill_count, 1);
        assert_eq!(summary.paid_amount, Decimal::new(200125, 2));
        assert_eq!(summary.outstanding_amount, Decimal::new(140000, 2));

        let january = summarize_month(&bills[0]);
        assert_eq!(january.supplier_bill_count, 2);
        assert_eq!(january.outstanding_amount, Decimal::new(90000, 2));
    }

    #[test]
    fn test_pending_payments() {
        let confirmations = ConfirmationSet::new()
            .confirm_payment("2025-01".parse().unwrap(), "道旅", "2025-02-05", "TXN1")
            .unwrap();
        let bills = aggregate(&orders(), &confirmations);

        let pending: Vec<(String, &str)> = pending_payments(&bills)
            .into_iter()
            .map(|(m, s)| (m.to_string(), s.supplier_name.as_str()))
            .collect();
        assert_eq!(
            pending,
            [
                ("2025-01".to_string(), "携程"),
                ("2024-12".to_string(), "携程"),
            ]
        );
    }
}

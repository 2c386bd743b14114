//! Order record (供应商结算订单)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A completed hotel order as delivered by the booking subsystem.
///
/// Immutable once produced. `supplier_amount` is what the platform owes the
/// supplying party for this stay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub order_id: String,
    /// Check-out date (YYYY-MM-DD); decides the billing month
    pub check_out_date: String,
    /// Amount payable to the supplier
    pub supplier_amount: Decimal,
    pub supplier_name: String,
}

impl OrderRecord {
    pub fn new(
        order_id: impl Into<String>,
        check_out_date: impl Into<String>,
        supplier_amount: Decimal,
        supplier_name: impl Into<String>,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            check_out_date: check_out_date.into(),
            supplier_amount,
            supplier_name: supplier_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_with_float_amount() {
        let json = r#"{
            "orderId": "ORD001",
            "checkOutDate": "2025-01-15",
            "supplierAmount": 1200.50,
            "supplierName": "道旅"
        }"#;
        let order: OrderRecord = serde_json::from_str(json).unwrap();
        assert_eq!(order.order_id, "ORD001");
        assert_eq!(order.supplier_amount, Decimal::new(120050, 2));
        assert_eq!(order.supplier_name, "道旅");
    }

    #[test]
    fn test_serialize_amount_as_number() {
        let order = OrderRecord::new("A", "2025-01-15", Decimal::new(90000, 2), "携程");
        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["supplierAmount"], serde_json::json!(900.0));
        assert_eq!(value["checkOutDate"], "2025-01-15");
    }
}

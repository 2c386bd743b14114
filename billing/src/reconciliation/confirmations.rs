//! 付款确认集合 - 不可变、带版本号
//!
//! Every successful confirmation produces a *new* [`ConfirmationSet`]; the
//! previous value is left untouched, so readers holding an older snapshot
//! keep a consistent view. Entries are shared through an `Arc`, which makes
//! snapshots cheap to clone.

use crate::utils::validation::{
    MAX_PAID_AT_LEN, MAX_SUPPLIER_NAME_LEN, MAX_TRANSACTION_NUMBER_LEN, validate_required_text,
};
use shared::billing::{BillingMonth, ConfirmationKey, PaymentConfirmation};
use shared::error::{AppError, AppResult, ErrorCode};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Versioned map of `(month, supplier)` → [`PaymentConfirmation`].
///
/// State per key is one-way: Unpaid → Paid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfirmationSet {
    entries: Arc<BTreeMap<ConfirmationKey, PaymentConfirmation>>,
    version: u64,
}

impl ConfirmationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful writes that led to this snapshot
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &ConfirmationKey) -> Option<&PaymentConfirmation> {
        self.entries.get(key)
    }

    pub fn get_for(&self, month: BillingMonth, supplier_name: &str) -> Option<&PaymentConfirmation> {
        self.get(&ConfirmationKey::new(month, supplier_name))
    }

    pub fn is_paid(&self, month: BillingMonth, supplier_name: &str) -> bool {
        self.get_for(month, supplier_name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ConfirmationKey, &PaymentConfirmation)> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &BTreeMap<ConfirmationKey, PaymentConfirmation> {
        &self.entries
    }

    /// True when both values share the same underlying entries
    pub fn same_snapshot(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }

    /// Record that the supplier bill for `month` was paid.
    ///
    /// - blank `paid_at` / `transaction_number` → validation error, nothing changes
    /// - same key with identical values → returns an equal set (idempotent)
    /// - same key with different values → [`ErrorCode::PaymentAlreadyConfirmed`]
    pub fn confirm_payment(
        &self,
        month: BillingMonth,
        supplier_name: &str,
        paid_at: &str,
        transaction_number: &str,
    ) -> AppResult<Self> {
        validate_required_text(supplier_name, "supplier_name", MAX_SUPPLIER_NAME_LEN)?;
        validate_required_text(paid_at, "paid_at", MAX_PAID_AT_LEN)?;
        validate_required_text(
            transaction_number,
            "transaction_number",
            MAX_TRANSACTION_NUMBER_LEN,
        )?;

        let key = ConfirmationKey::new(month, supplier_name);
        let confirmation = PaymentConfirmation {
            paid_at: paid_at.trim().to_string(),
            transaction_number: transaction_number.trim().to_string(),
        };

        if let Some(existing) = self.entries.get(&key) {
            if *existing == confirmation {
                tracing::debug!(key = %key, "Payment confirmation repeated, no change");
                return Ok(self.clone());
            }
            return Err(AppError::with_message(
                ErrorCode::PaymentAlreadyConfirmed,
                format!("Payment for {key} was already confirmed"),
            )
            .with_detail("key", key.to_string())
            .with_detail("transaction_number", existing.transaction_number.clone()));
        }

        let mut entries = (*self.entries).clone();
        entries.insert(key.clone(), confirmation);

        tracing::info!(
            key = %key,
            transaction_number = %transaction_number.trim(),
            version = self.version + 1,
            "Supplier payment confirmed"
        );

        Ok(Self {
            entries: Arc::new(entries),
            version: self.version + 1,
        })
    }
}

impl From<BTreeMap<ConfirmationKey, PaymentConfirmation>> for ConfirmationSet {
    fn from(entries: BTreeMap<ConfirmationKey, PaymentConfirmation>) -> Self {
        Self {
            entries: Arc::new(entries),
            version: 0,
        }
    }
}

impl FromIterator<(ConfirmationKey, PaymentConfirmation)> for ConfirmationSet {
    fn from_iter<I: IntoIterator<Item = (ConfirmationKey, PaymentConfirmation)>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<BTreeMap<_, _>>())
    }
}

/// Free-function form of [`ConfirmationSet::confirm_payment`]
pub fn confirm_payment(
    confirmations: &ConfirmationSet,
    month: BillingMonth,
    supplier_name: &str,
    paid_at: &str,
    transaction_number: &str,
) -> AppResult<ConfirmationSet> {
    confirmations.confirm_payment(month, supplier_name, paid_at, transaction_number)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan() -> BillingMonth {
        "2025-01".parse().unwrap()
    }

    #[test]
    fn test_confirm_marks_paid() {
        let set = ConfirmationSet::new();
        assert!(!set.is_paid(jan(), "道旅"));

        let next = set
            .confirm_payment(jan(), "道旅", "2025-02-05 10:30", "TXN001")
            .unwrap();
        assert!(next.is_paid(jan(), "道旅"));
        assert_eq!(next.version(), 1);

        let c = next.get_for(jan(), "道旅").unwrap();
        assert_eq!(c.paid_at, "2025-02-05 10:30");
        assert_eq!(c.transaction_number, "TXN001");

        // previous snapshot untouched
        assert!(set.is_empty());
        assert_eq!(set.version(), 0);
    }

    #[test]
    fn test_confirm_trims_values() {
        let next = ConfirmationSet::new()
            .confirm_payment(jan(), "携程", "  2025-02-01 ", " TXN9 ")
            .unwrap();
        let c = next.get_for(jan(), "携程").unwrap();
        assert_eq!(c.paid_at, "2025-02-01");
        assert_eq!(c.transaction_number, "TXN9");
    }

    #[test]
    fn test_empty_fields_rejected() {
        let set = ConfirmationSet::new();

        let err = set.confirm_payment(jan(), "道旅", "2025-02-05", "").unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.details.unwrap().get("field").unwrap(), "transaction_number");

        let err = set.confirm_payment(jan(), "道旅", "  ", "TXN").unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);

        let err = set.confirm_payment(jan(), "", "2025-02-05", "TXN").unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);

        assert!(set.is_empty());
    }

    #[test]
    fn test_identical_repeat_is_idempotent() {
        let once = ConfirmationSet::new()
            .confirm_payment(jan(), "道旅", "2025-02-05", "TXN001")
            .unwrap();
        let twice = once
            .confirm_payment(jan(), "道旅", "2025-02-05", "TXN001")
            .unwrap();
        assert_eq!(once, twice);
        assert!(once.same_snapshot(&twice));
    }

    #[test]
    fn test_conflicting_repeat_rejected() {
        let once = ConfirmationSet::new()
            .confirm_payment(jan(), "道旅", "2025-02-05", "TXN001")
            .unwrap();
        let err = once
            .confirm_payment(jan(), "道旅", "2025-02-06", "TXN002")
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::PaymentAlreadyConfirmed);
        assert_eq!(
            once.get_for(jan(), "道旅").unwrap().transaction_number,
            "TXN001"
        );
    }

    #[test]
    fn test_other_keys_unaffected() {
        let feb: BillingMonth = "2025-02".parse().unwrap();
        let set = ConfirmationSet::new()
            .confirm_payment(jan(), "携程", "2025-02-01", "A")
            .unwrap();
        let next = set
            .confirm_payment(feb, "携程", "2025-03-01", "B")
            .unwrap();

        assert_eq!(next.len(), 2);
        assert_eq!(next.get_for(jan(), "携程"), set.get_for(jan(), "携程"));
        assert!(!next.is_paid(jan(), "道旅"));
    }

    #[test]
    fn test_from_iter() {
        let set: ConfirmationSet = [(
            ConfirmationKey::new(jan(), "道旅"),
            PaymentConfirmation {
                paid_at: "2025-02-05".into(),
                transaction_number: "T".into(),
            },
        )]
        .into_iter()
        .collect();
        assert_eq!(set.version(), 0);
        assert!(set.is_paid(jan(), "道旅"));
    }
}

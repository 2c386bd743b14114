//! Payment confirmation (付款确认)

use super::month::BillingMonth;
use crate::error::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Composite key of a supplier bill: `(month, supplier_name)`.
///
/// Display form is `"{month}-{supplier_name}"`, e.g. `2025-01-道旅`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ConfirmationKey {
    pub month: BillingMonth,
    pub supplier_name: String,
}

impl ConfirmationKey {
    pub fn new(month: BillingMonth, supplier_name: impl Into<String>) -> Self {
        Self {
            month,
            supplier_name: supplier_name.into(),
        }
    }
}

impl fmt::Display for ConfirmationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.month, self.supplier_name)
    }
}

impl FromStr for ConfirmationKey {
    type Err = AppError;

    /// Inverse of `Display`. The month part has a fixed width, so supplier
    /// names containing `-` are unambiguous.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            AppError::with_message(
                ErrorCode::InvalidFormat,
                format!("Invalid confirmation key: {s}"),
            )
        };
        let month = s.get(..7).ok_or_else(invalid)?;
        let supplier = s.get(8..).ok_or_else(invalid)?;
        if s.as_bytes().get(7) != Some(&b'-') || supplier.is_empty() {
            return Err(invalid());
        }
        Ok(Self::new(month.parse()?, supplier))
    }
}

impl TryFrom<String> for ConfirmationKey {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ConfirmationKey> for String {
    fn from(key: ConfirmationKey) -> Self {
        key.to_string()
    }
}

/// Operator's manual confirmation that a supplier bill was settled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentConfirmation {
    /// When the transfer was made (free-form timestamp text)
    pub paid_at: String,
    /// Bank / settlement reference
    pub transaction_number: String,
}

//! Money calculation utilities using rust_decimal for precision
//!
//! Supplier amounts are carried as `Decimal` end to end, so sums over many
//! orders never drift. Rounding only happens at display time.

use rust_decimal::prelude::*;
use shared::error::{AppError, AppResult, ErrorCode};

/// Rounding for displayed monetary values (2 decimal places, half away from zero)
pub const DECIMAL_PLACES: u32 = 2;

/// Round to 2 decimal places for display / export
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Exact sum of amounts
pub fn sum_amounts<'a>(amounts: impl IntoIterator<Item = &'a Decimal>) -> Decimal {
    amounts.into_iter().sum()
}

/// Supplier amounts must be non-negative; there is no upper bound
pub fn validate_supplier_amount(amount: Decimal) -> AppResult<()> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(AppError::with_message(
            ErrorCode::OrderInvalidAmount,
            format!("supplier amount must be non-negative, got {}", amount),
        ));
    }
    Ok(())
}

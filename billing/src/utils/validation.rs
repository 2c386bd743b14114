//! Input validation helpers
//!
//! Centralized text length constants and validation functions for
//! operator-entered settlement data.

use shared::error::{AppError, AppResult};

// ── Text length limits ──────────────────────────────────────────────

/// Supplier display names
pub const MAX_SUPPLIER_NAME_LEN: usize = 200;

/// Payment timestamp text (`2025-02-05 10:30:00`, RFC 3339, ...)
pub const MAX_PAID_AT_LEN: usize = 64;

/// Bank / settlement reference numbers
pub const MAX_TRANSACTION_NUMBER_LEN: usize = 100;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
///
/// Whitespace-only input counts as empty.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::required_field(field));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        ))
        .with_detail("field", field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn test_empty_and_blank_rejected() {
        for value in ["", "   ", "\t\n"] {
            let err = validate_required_text(value, "transaction_number", 10).unwrap_err();
            assert_eq!(err.code, ErrorCode::RequiredField);
        }
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // 4 CJK chars = 12 bytes
        assert!(validate_required_text("携程旅行", "supplier_name", 4).is_ok());
        let err = validate_required_text("携程旅行网", "supplier_name", 4).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(
            err.details.unwrap().get("field").unwrap(),
            "supplier_name"
        );
    }
}

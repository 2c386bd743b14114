//! Unified error codes for the billing workspace
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 5xxx: Payment errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the display layer can
/// switch on them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,

    // ==================== 4xxx: Order ====================
    /// Check-out date is not a valid `YYYY-MM-DD` date
    OrderInvalidCheckOutDate = 4010,
    /// Supplier amount is negative
    OrderInvalidAmount = 4011,
    /// Supplier name is blank
    OrderSupplierMissing = 4012,

    // ==================== 5xxx: Payment ====================
    /// Billing month is not a valid `YYYY-MM` month
    PaymentInvalidMonth = 5010,
    /// The supplier bill for this month was already settled differently
    PaymentAlreadyConfirmed = 5011,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Storage read/write failed
    StorageFailed = 9400,
    /// Storage content could not be decoded
    StorageCorrupted = 9403,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",

            // Order
            ErrorCode::OrderInvalidCheckOutDate => "Order check-out date is invalid",
            ErrorCode::OrderInvalidAmount => "Order supplier amount is invalid",
            ErrorCode::OrderSupplierMissing => "Order supplier name is missing",

            // Payment
            ErrorCode::PaymentInvalidMonth => "Billing month is invalid",
            ErrorCode::PaymentAlreadyConfirmed => "Payment has already been confirmed",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::StorageFailed => "Storage operation failed",
            ErrorCode::StorageCorrupted => "Storage corrupted (data file damaged)",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),

            // Order
            4010 => Ok(ErrorCode::OrderInvalidCheckOutDate),
            4011 => Ok(ErrorCode::OrderInvalidAmount),
            4012 => Ok(ErrorCode::OrderSupplierMissing),

            // Payment
            5010 => Ok(ErrorCode::PaymentInvalidMonth),
            5011 => Ok(ErrorCode::PaymentAlreadyConfirmed),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9400 => Ok(ErrorCode::StorageFailed),
            9403 => Ok(ErrorCode::StorageCorrupted),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::RequiredField.code(), 7);
        assert_eq!(ErrorCode::OrderInvalidCheckOutDate.code(), 4010);
        assert_eq!(ErrorCode::PaymentAlreadyConfirmed.code(), 5011);
        assert_eq!(ErrorCode::StorageCorrupted.code(), 9403);
    }

    #[test]
    fn test_try_from_roundtrip_every_code() {
        let all = [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::InvalidFormat,
            ErrorCode::RequiredField,
            ErrorCode::OrderInvalidCheckOutDate,
            ErrorCode::OrderInvalidAmount,
            ErrorCode::OrderSupplierMissing,
            ErrorCode::PaymentInvalidMonth,
            ErrorCode::PaymentAlreadyConfirmed,
            ErrorCode::InternalError,
            ErrorCode::StorageFailed,
            ErrorCode::StorageCorrupted,
        ];
        for code in all {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_invalid_code() {
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
        assert_eq!(ErrorCode::try_from(3), Err(InvalidErrorCode(3)));
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::ValidationFailed.to_string(), "E0002");
        assert_eq!(ErrorCode::PaymentAlreadyConfirmed.to_string(), "E5011");
    }

    #[test]
    fn test_serde_as_u16() {
        let json = serde_json::to_string(&ErrorCode::PaymentInvalidMonth).unwrap();
        assert_eq!(json, "5010");
        let code: ErrorCode = serde_json::from_str("4011").unwrap();
        assert_eq!(code, ErrorCode::OrderInvalidAmount);
        assert!(serde_json::from_str::<ErrorCode>("1234").is_err());
    }
}

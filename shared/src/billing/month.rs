//! Billing month (账期月份)

use crate::error::{AppError, AppResult, ErrorCode};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Calendar month a supplier bill belongs to, displayed as zero-padded `YYYY-MM`.
///
/// Ordering is chronological, which matches lexicographic order of the
/// display form for years 0000-9999.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BillingMonth {
    year: i32,
    month: u32,
}

impl BillingMonth {
    /// Build from year and 1-based month
    pub fn new(year: i32, month: u32) -> AppResult<Self> {
        if !(1..=12).contains(&month) || !(0..=9999).contains(&year) {
            return Err(AppError::with_message(
                ErrorCode::PaymentInvalidMonth,
                format!("Invalid billing month: {year}-{month}"),
            ));
        }
        Ok(Self { year, month })
    }

    /// Month of a check-out date (`YYYY-MM-DD`)
    ///
    /// The whole date is validated, so `2025-02-30` is rejected rather than
    /// silently bucketed under `2025-02`.
    pub fn from_check_out_date(date: &str) -> AppResult<Self> {
        let invalid = || {
            AppError::with_message(
                ErrorCode::OrderInvalidCheckOutDate,
                format!("Invalid check-out date: {date}"),
            )
            .with_detail("check_out_date", date)
        };
        let trimmed = date.trim();
        // chrono's %Y accepts a sign; check-out dates never carry one
        if !trimmed.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let parsed = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| invalid())?;
        Self::try_from(parsed).map_err(|_| invalid())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

impl TryFrom<NaiveDate> for BillingMonth {
    type Error = AppError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::new(date.year(), date.month())
    }
}

impl FromStr for BillingMonth {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            AppError::with_message(
                ErrorCode::PaymentInvalidMonth,
                format!("Invalid billing month: {s}"),
            )
        };
        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        if !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

impl TryFrom<String> for BillingMonth {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BillingMonth> for String {
    fn from(month: BillingMonth) -> Self {
        month.to_string()
    }
}

impl fmt::Display for BillingMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_check_out_date() {
        let month = BillingMonth::from_check_out_date("2025-01-15").unwrap();
        assert_eq!(month.to_string(), "2025-01");
        assert_eq!(month.year(), 2025);
        assert_eq!(month.month(), 1);
    }

    #[test]
    fn test_from_check_out_date_rejects_garbage() {
        for bad in [
            "",
            "2025-1-5x",
            "15/01/2025",
            "2025-02-30",
            "2025-13-01",
            "abc",
            "-0001-01-15",
            "+2025-01-15",
            "12025-01-15",
        ] {
            let err = BillingMonth::from_check_out_date(bad).unwrap_err();
            assert_eq!(err.code, ErrorCode::OrderInvalidCheckOutDate, "input: {bad}");
        }
    }

    #[test]
    fn test_from_date_outside_four_digit_years() {
        let date = NaiveDate::from_ymd_opt(-1, 1, 15).unwrap();
        let err = BillingMonth::try_from(date).unwrap_err();
        assert_eq!(err.code, ErrorCode::PaymentInvalidMonth);

        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        assert_eq!(BillingMonth::try_from(date).unwrap().to_string(), "2025-01");
    }

    #[test]
    fn test_parse_month() {
        let month: BillingMonth = "2024-12".parse().unwrap();
        assert_eq!(month, BillingMonth::new(2024, 12).unwrap());

        for bad in ["2024-13", "2024-00", "2024-1", "24-01", "2024/01", "2024-01-01", "+024-01"] {
            let err = bad.parse::<BillingMonth>().unwrap_err();
            assert_eq!(err.code, ErrorCode::PaymentInvalidMonth, "input: {bad}");
        }
    }

    #[test]
    fn test_ordering_matches_display_order() {
        let a: BillingMonth = "2024-12".parse().unwrap();
        let b: BillingMonth = "2025-01".parse().unwrap();
        let c: BillingMonth = "2025-10".parse().unwrap();
        assert!(a < b && b < c);
        assert!(a.to_string() < b.to_string() && b.to_string() < c.to_string());
    }

    #[test]
    fn test_serde_as_string() {
        let month: BillingMonth = "2025-03".parse().unwrap();
        assert_eq!(serde_json::to_string(&month).unwrap(), "\"2025-03\"");
        let back: BillingMonth = serde_json::from_str("\"2025-03\"").unwrap();
        assert_eq!(back, month);
        assert!(serde_json::from_str::<BillingMonth>("\"2025-3\"").is_err());
    }
}

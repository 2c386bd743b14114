//! 金额展示格式化

use crate::money::round_money;
use rust_decimal::Decimal;

/// Format an amount as `¥12,345.60` style text.
///
/// Rounded to 2 places half away from zero; the sign goes before the symbol.
pub fn format_amount(amount: Decimal, symbol: &str) -> String {
    let rounded = round_money(amount);
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{symbol}{grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Decimal::new(290125, 2), "¥"), "¥2,901.25");
        assert_eq!(format_amount(Decimal::from(900), "¥"), "¥900.00");
        assert_eq!(format_amount(Decimal::ZERO, "¥"), "¥0.00");
        assert_eq!(format_amount(Decimal::new(123456789, 1), "$"), "$12,345,678.90");
        assert_eq!(format_amount(Decimal::from(100000), ""), "100,000.00");
    }

    #[test]
    fn test_format_amount_rounding_and_sign() {
        assert_eq!(format_amount(Decimal::new(1005, 3), "¥"), "¥1.01");
        assert_eq!(format_amount(Decimal::new(-150000, 2), "¥"), "-¥1,500.00");
        assert_eq!(format_amount(Decimal::new(-1, 3), "¥"), "¥0.00");
    }
}

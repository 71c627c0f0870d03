//! Won formatting.

use rust_decimal::{Decimal, RoundingStrategy};
use studio_core::locale::Locale;

/// Formats a whole-won amount with thousands separators: `3,680,000원` in
/// Korean, `₩3,680,000` in English.
#[must_use]
pub fn format_won(amount: Decimal, locale: Locale) -> String {
    let whole = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = whole.abs().trunc().normalize().to_string();
    let grouped = group_thousands(&digits);
    let sign = if whole.is_sign_negative() && !whole.is_zero() {
        "-"
    } else {
        ""
    };
    match locale {
        Locale::Ko => format!("{sign}{grouped}원"),
        Locale::En => format!("{sign}₩{grouped}"),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_formats_korean_amounts_with_suffix() {
        assert_eq!(format_won(dec!(3680000), Locale::Ko), "3,680,000원");
        assert_eq!(format_won(dec!(0), Locale::Ko), "0원");
        assert_eq!(format_won(dec!(950), Locale::Ko), "950원");
    }

    #[test]
    fn test_formats_english_amounts_with_symbol() {
        assert_eq!(format_won(dec!(3680000), Locale::En), "₩3,680,000");
        assert_eq!(format_won(dec!(1000), Locale::En), "₩1,000");
    }

    #[test]
    fn test_rounds_fractions_before_grouping() {
        assert_eq!(format_won(dec!(1234567.5), Locale::Ko), "1,234,568원");
    }
}

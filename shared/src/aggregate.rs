//! Count and total derived from the record list.
//!
//! Nothing here is cached: the view recomputes a [`Summary`] from the store
//! on every render.

use num_format::{Locale, ToFormattedString as _};
use serde::{Deserialize, Serialize};

use crate::model::Record;

/// zh-TW prints at most three fraction digits.
const MAX_FRACTION_DIGITS: u32 = 3;

/// Numeric reading of a raw amount field.
///
/// Follows browser number coercion: surrounding whitespace (including a byte
/// order mark) is ignored, empty text is zero, `0x`/`0o`/`0b` integer literals
/// are accepted, and anything that does not parse (or parses to a non-finite
/// value) counts as zero.
pub fn parse_amount(raw: &str) -> f64 {
    let text = raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if text.is_empty() {
        return 0.0;
    }

    let value = radix_literal(text).unwrap_or_else(|| {
        if is_decimal_literal(text) {
            text.parse::<f64>().unwrap_or(0.0)
        } else {
            0.0
        }
    });

    if value.is_finite() && value != 0.0 {
        value
    } else {
        0.0
    }
}

#[allow(clippy::cast_precision_loss)]
fn radix_literal(text: &str) -> Option<f64> {
    let (radix, digits) = match text.get(..2)? {
        "0x" | "0X" => (16, &text[2..]),
        "0o" | "0O" => (8, &text[2..]),
        "0b" | "0B" => (2, &text[2..]),
        _ => return None,
    };
    if digits.starts_with('+') {
        return Some(0.0);
    }
    Some(u128::from_str_radix(digits, radix).map_or(0.0, |v| v as f64))
}

// Rust's float parser also accepts "inf", "nan" and "infinity"; browsers do not.
fn is_decimal_literal(text: &str) -> bool {
    text.bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub total: f64,
}

impl Summary {
    pub fn of(records: &[Record]) -> Self {
        Self {
            count: records.len(),
            total: records.iter().map(|r| parse_amount(&r.amount)).sum(),
        }
    }
}

/// Thousands-grouped amount with up to three fraction digits, e.g. `1,234.5`.
pub fn format_amount(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞".to_owned() } else { "-∞".to_owned() };
    }

    let scale = 10u64.pow(MAX_FRACTION_DIGITS);
    #[allow(clippy::cast_precision_loss)]
    let (scaled, limit) = (value.abs() * scale as f64, u64::MAX as f64);
    if scaled >= limit {
        // Too large for any fraction digit to survive.
        let mut out = String::new();
        if value < 0.0 {
            out.push('-');
        }
        out.push_str(&format_large_integer(value.abs()));
        return out;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let scaled = scaled.round() as u64;
    let integer = scaled / scale;
    let fraction = scaled % scale;

    let mut out = String::new();
    if value < 0.0 && scaled != 0 {
        out.push('-');
    }
    out.push_str(&integer.to_formatted_string(&Locale::en));
    if fraction != 0 {
        let digits = format!("{fraction:0width$}", width = MAX_FRACTION_DIGITS as usize);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

/// Exact decimal expansion of a large finite magnitude, grouped by thousands.
fn format_large_integer(magnitude: f64) -> String {
    let digits = format!("{magnitude:.0}");
    if let Ok(integer) = digits.parse::<u128>() {
        return integer.to_formatted_string(&Locale::en);
    }

    let separator = Locale::en.separator();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(digit);
    }
    out
}

pub fn format_currency(prefix: &str, value: f64) -> String {
    let amount = format_amount(value);
    if prefix.is_empty() {
        amount
    } else {
        format!("{prefix} {amount}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn record_with_amount(amount: &str) -> Record {
        let mut record = Record::blank();
        record.amount = amount.to_owned();
        record
    }

    mod parse_tests {
        use super::*;

        #[test]
        fn plain_numbers() {
            assert_eq!(parse_amount("100"), 100.0);
            assert_eq!(parse_amount("12.5"), 12.5);
            assert_eq!(parse_amount("-3"), -3.0);
            assert_eq!(parse_amount("+7"), 7.0);
            assert_eq!(parse_amount(".5"), 0.5);
            assert_eq!(parse_amount("1e3"), 1000.0);
        }

        #[test]
        fn whitespace_is_ignored() {
            assert_eq!(parse_amount("  42 "), 42.0);
            assert_eq!(parse_amount("\t\n8\n"), 8.0);
            assert_eq!(parse_amount("   "), 0.0);
            assert_eq!(parse_amount("\u{feff}42"), 42.0);
            assert_eq!(parse_amount(" 42\u{feff} "), 42.0);
        }

        #[test]
        fn radix_literals() {
            assert_eq!(parse_amount("0x1F"), 31.0);
            assert_eq!(parse_amount("0o17"), 15.0);
            assert_eq!(parse_amount("0b101"), 5.0);
            assert_eq!(parse_amount("0x"), 0.0);
            assert_eq!(parse_amount("0xZZ"), 0.0);
            assert_eq!(parse_amount("0x+1"), 0.0);
        }

        #[test]
        fn garbage_is_zero() {
            assert_eq!(parse_amount(""), 0.0);
            assert_eq!(parse_amount("abc"), 0.0);
            assert_eq!(parse_amount("1,000"), 0.0);
            assert_eq!(parse_amount("12abc"), 0.0);
            assert_eq!(parse_amount("NaN"), 0.0);
            assert_eq!(parse_amount("inf"), 0.0);
            assert_eq!(parse_amount("Infinity"), 0.0);
            assert_eq!(parse_amount("1e999"), 0.0);
            assert_eq!(parse_amount("--1"), 0.0);
        }

        #[test]
        fn negative_zero_reads_as_zero() {
            assert!(parse_amount("-0").is_sign_positive());
        }
    }

    mod summary_tests {
        use super::*;

        #[test]
        fn invalid_and_blank_amounts_count_as_zero() {
            let records: Vec<_> = ["100", "", "abc", "50"]
                .iter()
                .map(|a| record_with_amount(a))
                .collect();
            let summary = Summary::of(&records);
            assert_eq!(summary.count, 4);
            assert_eq!(summary.total, 150.0);
        }

        proptest! {
            #[test]
            fn total_is_sum_of_integer_amounts(amounts in prop::collection::vec(0u32..1_000_000, 1..20)) {
                let records: Vec<_> = amounts.iter().map(|a| record_with_amount(&a.to_string())).collect();
                let expected: u64 = amounts.iter().map(|&a| u64::from(a)).sum();
                let summary = Summary::of(&records);
                prop_assert_eq!(summary.count, amounts.len());
                #[allow(clippy::cast_precision_loss)]
                let expected = expected as f64;
                prop_assert_eq!(summary.total, expected);
            }
        }
    }

    mod format_tests {
        use super::*;

        #[test]
        fn groups_thousands() {
            assert_eq!(format_amount(0.0), "0");
            assert_eq!(format_amount(999.0), "999");
            assert_eq!(format_amount(1500.0), "1,500");
            assert_eq!(format_amount(1_234_567.0), "1,234,567");
        }

        #[test]
        fn keeps_up_to_three_fraction_digits() {
            assert_eq!(format_amount(1234.5), "1,234.5");
            assert_eq!(format_amount(0.125), "0.125");
            assert_eq!(format_amount(2.0004), "2");
            assert_eq!(format_amount(1.9996), "2");
        }

        #[test]
        fn negatives_and_non_finite() {
            assert_eq!(format_amount(-1500.0), "-1,500");
            assert_eq!(format_amount(-0.0001), "0");
            assert_eq!(format_amount(f64::INFINITY), "∞");
        }

        #[test]
        fn large_totals_keep_every_integer_digit() {
            assert_eq!(
                format_amount(parse_amount("100000000000000000")),
                "100,000,000,000,000,000"
            );
            assert_eq!(format_amount(1e17), "100,000,000,000,000,000");
            assert_eq!(format_amount(-1e20), "-100,000,000,000,000,000,000");
            assert_eq!(
                format_amount(1e40),
                "10,000,000,000,000,000,303,786,028,427,003,666,890,752"
            );
        }

        #[test]
        fn currency_prefix() {
            assert_eq!(format_currency("NT$", 1500.0), "NT$ 1,500");
            assert_eq!(format_currency("", 12.0), "12");
        }
    }
}

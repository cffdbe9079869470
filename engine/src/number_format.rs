//! FILENAME: engine/src/number_format.rs
//! PURPOSE: Number and date formatting for display strings.
//! CONTEXT: Both export formats print amounts the same way: Russian locale
//! with a space as the thousands separator, a decimal comma and a trailing
//! currency glyph. Formatting is cosmetic; it never feeds back into the
//! stored numeric values.

use chrono::{DateTime, Utc};

/// Format a monetary value: two decimals, thousands separator, trailing
/// currency glyph. `26310.0` becomes `26 310,00 ₽`.
pub fn format_currency(value: f64) -> String {
    format!("{} ₽", format_decimal(value, 2))
}

/// Format a quantity with up to two decimals, trailing zeros trimmed.
/// `45.8` becomes `45,8`, `15.0` becomes `15`.
pub fn format_quantity(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    trimmed.replace('.', ",")
}

/// Format an area value with its unit suffix, e.g. `20 м²`.
pub fn format_area(value: f64) -> String {
    format!("{} м²", format_quantity(value))
}

/// Format a timestamp as `DD.MM.YYYY`.
pub fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%d.%m.%Y").to_string()
}

/// Format a number with fixed decimal places, a space as the thousands
/// separator and a comma as the decimal separator.
fn format_decimal(value: f64, decimal_places: u8) -> String {
    let fixed = format!("{:.prec$}", value, prec = decimal_places as usize);
    add_thousands_separator(&fixed)
}

/// Add thousands separators to a plain `-?digits[.digits]` string and swap
/// the decimal point for a comma.
fn add_thousands_separator(s: &str) -> String {
    let parts: Vec<&str> = s.split('.').collect();
    let integer_part = parts[0];
    let decimal_part = parts.get(1);

    let negative = integer_part.starts_with('-');
    let digits: String = integer_part.chars().filter(|c| c.is_ascii_digit()).collect();

    let mut result = String::new();
    let len = digits.len();

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(' ');
        }
        result.push(c);
    }

    if negative {
        result = format!("-{}", result);
    }

    if let Some(decimal) = decimal_part {
        result.push(',');
        result.push_str(decimal);
    }

    result
}

//! Display formatting for monetary amounts, percentages and plain numbers.
//!
//! Mirrors the dashboard's `es-MX` rendering: `$` prefix, comma thousands
//! separator, dot decimal point, half-away-from-zero rounding.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Split a value into sign, integer digits and zero-padded fraction digits.
fn fixed_parts(value: Decimal, decimals: u32) -> (bool, String, String) {
    let rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded < Decimal::ZERO;
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i.to_string(), f.to_string()),
        None => (text, String::new()),
    };
    let mut frac = frac_part;
    while (frac.len() as u32) < decimals {
        frac.push('0');
    }
    (negative, int_part, frac)
}

/// Insert a comma every three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a number with grouped thousands and a fixed number of decimals.
pub fn format_number(value: Decimal, decimals: u32) -> String {
    let (negative, int_part, frac) = fixed_parts(value, decimals);
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(&int_part));
    if decimals > 0 {
        out.push('.');
        out.push_str(&frac);
    }
    out
}

/// Decimal places used when the caller does not ask for a specific count.
pub const DEFAULT_DECIMALS: u32 = 2;

/// Format a monetary amount as MXN currency: `$1,234.50`, `-$98,765.43`.
pub fn format_currency(amount: Decimal) -> String {
    let rendered = format_number(amount, 2);
    match rendered.strip_prefix('-') {
        Some(rest) => format!("-${rest}"),
        None => format!("${rendered}"),
    }
}

/// Format a decimal rate as a percentage with one decimal: `0.256` → `25.6%`.
pub fn format_percentage(value: Decimal) -> String {
    let (negative, int_part, frac) = fixed_parts(value * dec!(100), 1);
    let sign = if negative { "-" } else { "" };
    format!("{sign}{int_part}.{frac}%")
}

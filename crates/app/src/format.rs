//! Display formatting for fiat values, quantities and timestamps.

use chrono::{DateTime, Utc};
use cryptolog_core::settings::DisplaySettings;
use log::warn;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt::Write;

/// Formats a fiat amount, e.g. `R$ 1.234,56` or `-R$ 0,50`.
///
/// Rounds half to even, the way platform currency formatters do.
pub fn format_fiat(value: Decimal, settings: &DisplaySettings) -> String {
    let rounded = value.round_dp(settings.fiat_precision);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let (int_part, frac_part) = split_fixed(rounded.abs(), settings.fiat_precision);

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&settings.currency_symbol);
    out.push(' ');
    out.push_str(&group_thousands(&int_part, settings.grouping_separator));
    if !frac_part.is_empty() {
        out.push(settings.decimal_separator);
        out.push_str(&frac_part);
    }
    out
}

/// Formats a quantity with a fixed number of decimals, `.` separator and no
/// grouping, e.g. `0.50000000`. Rounds half away from zero.
pub fn format_quantity(value: Decimal, settings: &DisplaySettings) -> String {
    let rounded = value.round_dp_with_strategy(
        settings.quantity_precision,
        RoundingStrategy::MidpointAwayFromZero,
    );
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let (int_part, frac_part) = split_fixed(rounded.abs(), settings.quantity_precision);
    if frac_part.is_empty() {
        format!("{}{}", sign, int_part)
    } else {
        format!("{}{}.{}", sign, int_part, frac_part)
    }
}

/// Formats a timestamp with the configured pattern, falling back to RFC 3339
/// when the pattern cannot be rendered.
pub fn format_timestamp(timestamp: DateTime<Utc>, settings: &DisplaySettings) -> String {
    let mut out = String::new();
    if write!(out, "{}", timestamp.format(&settings.date_format)).is_err() {
        warn!("Invalid date format '{}'", settings.date_format);
        return timestamp.to_rfc3339();
    }
    out
}

/// Splits an unsigned value into integer digits and exactly `precision`
/// fractional digits. `rescale` cannot widen values near `Decimal::MAX`, so
/// the fraction is padded here.
fn split_fixed(value: Decimal, precision: u32) -> (String, String) {
    let plain = value.to_string();
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), ""));
    let mut frac: String = frac_part.chars().take(precision as usize).collect();
    while frac.len() < precision as usize {
        frac.push('0');
    }
    (int_part.to_string(), frac)
}

fn group_thousands(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

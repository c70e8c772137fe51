// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use time::Date;
use time::macros::format_description;

/// Reads a pre-formatted display value as a number.
///
/// Accepts currency (`$5,000`), magnitude suffixes (`125K`, `1.2M`,
/// `$28.7K`), percentages and multipliers (`4.2%`, `3.4x`), explicit signs
/// (`-5.2%`) and ranges, which yield their lower bound (`$500-800`).
pub fn parse_display_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let (sign, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let unsigned = unsigned.strip_prefix('$').unwrap_or(unsigned);
    let lower_bound = unsigned.split('-').next().unwrap_or(unsigned).trim();
    let cleaned: String = lower_bound.chars().filter(|ch| *ch != ',').collect();
    let cleaned = cleaned.trim_end_matches(['%', 'x']);

    let (digits, multiplier) = match cleaned.chars().last() {
        Some('K' | 'k') => (&cleaned[..cleaned.len() - 1], 1_000.0),
        Some('M' | 'm') => (&cleaned[..cleaned.len() - 1], 1_000_000.0),
        Some('B' | 'b') => (&cleaned[..cleaned.len() - 1], 1_000_000_000.0),
        _ => (cleaned, 1.0),
    };
    if !digits.chars().any(|ch| ch.is_ascii_digit()) {
        return None;
    }
    let value: f64 = digits.parse().ok()?;
    Some(sign * value * multiplier)
}

const MAGNITUDES: [(f64, &str); 3] = [
    (1_000.0, "K"),
    (1_000_000.0, "M"),
    (1_000_000_000.0, "B"),
];

/// Compact magnitude display: `950`, `245K`, `1.1M`, `2B`.
///
/// The unit is chosen after rounding, so `999_950` prints `1M`.
pub fn format_compact(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_owned();
    }
    let absolute = value.abs();
    let whole = absolute.round();
    let sign = if value < 0.0 && whole > 0.0 { "-" } else { "" };
    if whole < 1000.0 {
        return format!("{sign}{whole:.0}");
    }

    let mut index = MAGNITUDES
        .iter()
        .rposition(|(divisor, _)| absolute >= *divisor)
        .unwrap_or(0);
    let mut rounded = (absolute / MAGNITUDES[index].0 * 10.0).round() / 10.0;
    if rounded >= 1000.0 && index + 1 < MAGNITUDES.len() {
        index += 1;
        rounded = (absolute / MAGNITUDES[index].0 * 10.0).round() / 10.0;
    }
    let suffix = MAGNITUDES[index].1;
    if rounded.fract().abs() < f64::EPSILON {
        format!("{sign}{rounded:.0}{suffix}")
    } else {
        format!("{sign}{rounded:.1}{suffix}")
    }
}

pub fn format_percent(percent: u32) -> String {
    format!("{percent}%")
}

pub fn format_date(date: Date) -> String {
    date.format(format_description!(
        "[month repr:short] [day padding:none], [year]"
    ))
    .unwrap_or_else(|_| date.to_string())
}

pub fn format_date_range(start: Date, end: Date) -> String {
    format!("{} - {}", format_date(start), format_date(end))
}

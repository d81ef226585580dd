//! Plain number rendering with thousands separators.

/// Insert `,` separators into the integer part of an already formatted number.
///
/// Accepts an optional leading `-` and an optional fractional part.
#[must_use]
pub fn with_separators(formatted: &str) -> String {
    let (sign, unsigned) = formatted
        .strip_prefix('-')
        .map_or(("", formatted), |rest| ("-", rest));
    let (int_part, frac_part) = unsigned
        .split_once('.')
        .map_or((unsigned, None), |(int, frac)| (int, Some(frac)));

    let mut output = String::with_capacity(formatted.len() + int_part.len() / 3);
    output.push_str(sign);
    let len = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i).is_multiple_of(3) {
            output.push(',');
        }
        output.push(ch);
    }
    if let Some(frac) = frac_part {
        output.push('.');
        output.push_str(frac);
    }
    output
}

/// Exactly `decimals` fractional digits, thousands-separated.
#[must_use]
pub fn fixed(value: f64, decimals: usize) -> String {
    with_separators(&format!("{value:.decimals$}"))
}

/// Integer rendering of a value whose fractional part is discarded.
///
/// Truncates toward zero; never renders `-0`.
#[must_use]
pub fn truncated(value: f64) -> String {
    fixed(value.trunc() + 0.0, 0)
}

/// At most `decimals` fractional digits, trailing zeros dropped.
#[must_use]
pub fn trimmed(value: f64, decimals: usize) -> String {
    let mut text = format!("{value:.decimals$}");
    if text.contains('.') {
        let keep = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(keep);
    }
    if text == "-0" {
        text = "0".to_string();
    }
    with_separators(&text)
}

/// Whether `value` has no fractional part.
#[must_use]
pub fn is_integral(value: f64) -> bool {
    value.fract() == 0.0
}

#[cfg(test)]
#[path = "number_tests.rs"]
mod tests;

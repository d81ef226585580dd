//! Text and number rendering for SVG attributes.

/// Escape text for use in SVG element content and attribute values.
#[must_use]
pub fn html_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Pixel coordinate with at most two decimals and no trailing zeros.
#[must_use]
pub fn coord(value: f64) -> String {
    let mut text = format!("{value:.2}");
    let keep = text.trim_end_matches('0').trim_end_matches('.').len();
    text.truncate(keep);
    if text == "-0" {
        text = "0".to_string();
    }
    text
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;

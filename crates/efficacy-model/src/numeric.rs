//! Numeric parsing and formatting shared across the pipeline.
//!
//! Cells stay strings until a stage needs a number; these helpers are the
//! single place where that conversion happens.

/// Parses a cell as f64, returning None for empty or non-numeric content.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Parses a cell as i64, returning None for empty or non-numeric content.
pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok()
}

/// Formats a floating-point number without trailing fractional zeros
/// ("10.50" -> "10.5"). Integral renderings pass through untouched so
/// "10" stays "10" and "0" stays "0".
pub fn format_numeric(value: f64) -> String {
    let rendered = format!("{value}");
    if rendered.contains('.') {
        rendered
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        rendered
    }
}

/// Formats an optional number, rendering the undefined sentinel as an
/// empty cell.
pub fn format_optional(value: Option<f64>) -> String {
    match value {
        Some(number) => format_numeric(number),
        None => String::new(),
    }
}

//! Input-boundary parsing for numeric text fields.
//!
//! Fields accept digits with at most one decimal point. Signs, exponents and
//! words such as `inf` are rejected here so the core only ever sees plain
//! non-negative numbers or empty text.

use crate::error::{PaintError, Result};

/// Parse a numeric form field. Empty text is 0.
pub fn parse_numeric_field(field: &str, raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    let invalid = || PaintError::InvalidNumber {
        field: field.to_string(),
        value: raw.to_string(),
    };

    if !is_plain_decimal(trimmed) {
        return Err(invalid());
    }

    // A lone "." passes the character filter but is not a number.
    trimmed.parse::<f64>().map_err(|_| invalid())
}

/// Parse an opening size written as `<width>x<height>` in feet.
///
/// `x`, `X` and `*` are accepted as separators, e.g. `3x7` or `2.5 * 4`.
pub fn parse_opening_spec(spec: &str) -> Result<(f64, f64)> {
    let invalid = || PaintError::InvalidOpeningSpec {
        value: spec.to_string(),
    };

    let mut parts = spec.split(|c: char| c == 'x' || c == 'X' || c == '*');
    let (width, height) = match (parts.next(), parts.next(), parts.next()) {
        (Some(w), Some(h), None) if !w.trim().is_empty() && !h.trim().is_empty() => (w, h),
        _ => return Err(invalid()),
    };

    let width = parse_numeric_field("width", width).map_err(|_| invalid())?;
    let height = parse_numeric_field("height", height).map_err(|_| invalid())?;
    Ok((width, height))
}

/// Digits with at most one decimal point.
fn is_plain_decimal(s: &str) -> bool {
    let mut seen_point = false;
    for c in s.chars() {
        match c {
            '0'..='9' => {}
            '.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }
    true
}

//! Line classification for the supported Excellon subset.
//!
//! Each normalized line maps to exactly one [`LineKind`]. Numeric fields are
//! scanned as the longest decimal prefix, so trailing feed/speed parameters
//! (`T1C0.8F200S65`) do not prevent a match, while a field with no digits at
//! all turns the line into [`LineKind::Other`].

use super::types::ExcellonUnits;

/// A single classified line of a drill file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineKind {
    /// `METRIC` or `INCH`, optionally followed by `,<suffix>`.
    Units(ExcellonUnits),
    /// `T<n>C<diameter>` with the raw (unscaled) diameter.
    ToolDefinition {
        /// Tool number.
        number: u32,
        /// Diameter in file units.
        diameter: f64,
    },
    /// Bare `T<n>`.
    ToolSelection(u32),
    /// `X<x>Y<y>` in file units.
    Coordinate {
        /// Raw X value.
        x: f64,
        /// Raw Y value.
        y: f64,
    },
    /// Anything outside the recognized subset.
    Other,
}

/// Classifies a trimmed, upper-cased line.
pub fn classify(line: &str) -> LineKind {
    if let Some(units) = units_directive(line) {
        return LineKind::Units(units);
    }

    if let Some(after_t) = line.strip_prefix('T') {
        return classify_tool(after_t);
    }

    if let Some(after_x) = line.strip_prefix('X') {
        return classify_coordinate(after_x);
    }

    LineKind::Other
}

fn units_directive(line: &str) -> Option<ExcellonUnits> {
    let (keyword, _suffix) = line.split_once(',').unwrap_or((line, ""));
    match keyword {
        "METRIC" => Some(ExcellonUnits::Metric),
        "INCH" => Some(ExcellonUnits::Imperial),
        _ => None,
    }
}

fn classify_tool(after_t: &str) -> LineKind {
    let Some((number, rest)) = scan_tool_number(after_t) else {
        return LineKind::Other;
    };

    if rest.is_empty() {
        return LineKind::ToolSelection(number);
    }

    rest.strip_prefix('C')
        .and_then(scan_decimal)
        .map_or(LineKind::Other, |(diameter, _)| LineKind::ToolDefinition {
            number,
            diameter,
        })
}

fn classify_coordinate(after_x: &str) -> LineKind {
    let Some((x, rest)) = scan_decimal(after_x) else {
        return LineKind::Other;
    };

    rest.strip_prefix('Y')
        .and_then(scan_decimal)
        .map_or(LineKind::Other, |(y, _)| LineKind::Coordinate { x, y })
}

fn scan_tool_number(raw: &str) -> Option<(u32, &str)> {
    let end = raw
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(raw.len());
    if end == 0 {
        return None;
    }

    // Leading zeros are insignificant: `T01` and `T1` name the same tool.
    let (digits, rest) = raw.split_at(end);
    digits.parse().ok().map(|number| (number, rest))
}

/// Scans `[+-]digits[.digits][E[+-]digits]` from the start of `raw`.
///
/// Returns the value and the unconsumed remainder, or `None` when the prefix
/// holds no mantissa digits or the value overflows to infinity.
fn scan_decimal(raw: &str) -> Option<(f64, &str)> {
    let bytes = raw.as_bytes();
    let mut end = 0;
    let mut mantissa_digits = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    end += count_digits(bytes, end, &mut mantissa_digits);
    if bytes.get(end) == Some(&b'.') {
        end += 1;
        end += count_digits(bytes, end, &mut mantissa_digits);
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'E' | b'e')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let mut exponent_digits = 0;
        exp_end += count_digits(bytes, exp_end, &mut exponent_digits);
        if exponent_digits > 0 {
            end = exp_end;
        }
    }

    let (number, rest) = raw.split_at(end);
    number
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(|value| (value, rest))
}

fn count_digits(bytes: &[u8], start: usize, total: &mut usize) -> usize {
    let count = bytes
        .iter()
        .skip(start)
        .take_while(|b| b.is_ascii_digit())
        .count();
    *total += count;
    count
}

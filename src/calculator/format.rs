//! Locale-aware number formatting for the calculator display.
//!
//! The display buffer is always a plain decimal literal. The only locale
//! difference is the character between the integer and fractional parts:
//! Russian and French use a comma, everything else a period.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A display literal: optional minus, no leading zeros, optional fraction.
    /// The separator is normalised to `.` before matching.
    static ref NUMBER_LITERAL: Regex = Regex::new(r"^-?(0|[1-9][0-9]*)(\.[0-9]*)?$").unwrap();
}

/// Character used to separate the integer and fractional parts of a number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DecimalSeparator {
    #[default]
    Period,
    Comma,
}

impl DecimalSeparator {
    /// Separator convention for a language code (`ru`, `en`, `fr`, ...).
    pub fn for_language(code: &str) -> Self {
        match code {
            "ru" | "fr" => Self::Comma,
            _ => Self::Period,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Period => '.',
            Self::Comma => ',',
        }
    }

    /// The separator of the other convention.
    fn other(self) -> Self {
        match self {
            Self::Period => Self::Comma,
            Self::Comma => Self::Period,
        }
    }
}

/// Returns true if `c` is a decimal separator in any supported locale.
pub fn is_separator(c: char) -> bool {
    c == '.' || c == ','
}

/// Parse a display buffer into a number.
///
/// A trailing separator is accepted (`"5,"` is 5). Returns `None` for
/// anything that is not a number literal, including the error message shown
/// after a failed calculation.
pub fn parse_number(buffer: &str, separator: DecimalSeparator) -> Option<f64> {
    if buffer.contains(separator.other().as_char()) {
        return None;
    }

    let normalized = buffer.replace(separator.as_char(), ".");
    let trimmed = normalized.strip_suffix('.').unwrap_or(&normalized);

    if !NUMBER_LITERAL.is_match(trimmed) {
        return None;
    }

    trimmed.parse::<f64>().ok()
}

/// Format a number for the display buffer.
///
/// Uses the shortest representation that round-trips, never exponent
/// notation. Negative zero is shown as `"0"`.
pub fn format_number(value: f64, separator: DecimalSeparator) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let formatted = format!("{}", value);
    match separator {
        DecimalSeparator::Period => formatted,
        DecimalSeparator::Comma => formatted.replace('.', ","),
    }
}

/// Check the display invariant: a number literal with at most one separator,
/// matching `separator`, without leading zeros, and never `-0`.
pub fn is_well_formed(buffer: &str, separator: DecimalSeparator) -> bool {
    if buffer.contains(separator.other().as_char()) {
        return false;
    }

    let normalized = buffer.replace(separator.as_char(), ".");
    if normalized == "-0" {
        return false;
    }

    NUMBER_LITERAL.is_match(&normalized)
}

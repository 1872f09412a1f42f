//! Keypad keys and parsing of typed key sequences.

use crate::calculator::Operator;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("unknown key '{key}' at position {position}")]
    Unknown { key: char, position: usize },
}

/// A button on the calculator keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// A digit 0-9
    Digit(u8),
    Decimal,
    Backspace,
    ToggleSign,
    Clear,
    Operator(Operator),
    Equals,
    /// Opens the language dialog
    Language,
}

impl Key {
    /// Map a typed character to a key.
    ///
    /// Both `.` and `,` press the decimal key; the calculator inserts the
    /// separator of the active language.
    pub fn from_char(c: char) -> Option<Self> {
        if let Some(d) = c.to_digit(10) {
            return Some(Self::Digit(d as u8));
        }
        if let Some(op) = Operator::from_char(c) {
            return Some(Self::Operator(op));
        }

        match c {
            '.' | ',' => Some(Self::Decimal),
            '<' => Some(Self::Backspace),
            '~' | '±' => Some(Self::ToggleSign),
            'C' | 'c' => Some(Self::Clear),
            '=' => Some(Self::Equals),
            'L' | 'l' => Some(Self::Language),
            _ => None,
        }
    }
}

/// Parse a typed key sequence such as `"12+3="`. Whitespace is ignored.
pub fn parse_keys(input: &str) -> Result<Vec<Key>, KeyError> {
    input
        .chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(position, key)| Key::from_char(key).ok_or(KeyError::Unknown { key, position }))
        .collect()
}

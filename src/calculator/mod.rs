//! Calculator core.
//!
//! This module provides:
//! - The input and evaluation state machine behind the keypad
//! - The four binary operators
//! - Locale-aware parsing and formatting of the display

mod format;
mod operator;
mod state;

pub use format::{DecimalSeparator, format_number, is_well_formed, parse_number};
pub use operator::{CalcError, Operator};
pub use state::{CalculatorState, PendingOperation, Phase};

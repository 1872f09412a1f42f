//! A four-function pocket calculator screen.
//!
//! The [`calculator`] module holds the input and evaluation state machine,
//! [`i18n`] the supported languages and their messages, and [`screen`] the
//! keypad glue that ties them together for a front end.

pub mod calculator;
pub mod config;
pub mod i18n;
pub mod logging;
pub mod screen;
pub mod ui;

pub use calculator::{CalculatorState, DecimalSeparator, Operator, Phase};
pub use i18n::{Language, Translate, Translations};
pub use screen::{CalculatorScreen, Key, KeyOutcome};

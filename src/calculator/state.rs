//! Calculator input and evaluation state machine.

use super::format::{self, DecimalSeparator};
use super::operator::{CalcError, Operator};
use crate::i18n::{Language, Translate};

/// Where the calculator is in entering a calculation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Typing the first operand (also the idle state).
    #[default]
    EnteringFirst,
    /// An operator was chosen; the next digit starts the second operand.
    AwaitingSecond,
    /// Typing the second operand.
    EnteringSecond,
    /// A result is shown; the next digit starts a fresh number.
    Evaluated,
    /// A calculation failed; only `clear` is accepted.
    Error,
}

/// Operator chosen together with the operand it applies to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendingOperation {
    pub operator: Operator,
    pub first_operand: f64,
}

/// State of one calculator session.
#[derive(Clone, Debug)]
pub struct CalculatorState {
    buffer: String,
    phase: Phase,
    pending: Option<PendingOperation>,
    separator: DecimalSeparator,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new(DecimalSeparator::default())
    }
}

impl CalculatorState {
    pub fn new(separator: DecimalSeparator) -> Self {
        Self {
            buffer: "0".to_string(),
            phase: Phase::EnteringFirst,
            pending: None,
            separator,
        }
    }

    /// Create a state using the separator convention of `language`.
    pub fn for_language(language: Language) -> Self {
        Self::new(language.separator())
    }

    /// Text currently shown: a number literal, or an error message.
    pub fn display(&self) -> &str {
        &self.buffer
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_error(&self) -> bool {
        self.phase == Phase::Error
    }

    pub fn pending(&self) -> Option<PendingOperation> {
        self.pending
    }

    pub fn separator(&self) -> DecimalSeparator {
        self.separator
    }

    /// Type a digit. Values above 9 are ignored.
    pub fn input_digit(&mut self, digit: u8) {
        if digit > 9 {
            tracing::warn!(digit, "Ignoring out-of-range digit");
            return;
        }
        let digit = char::from(b'0' + digit);

        match self.phase {
            Phase::Error => return,
            Phase::Evaluated => {
                self.buffer = digit.to_string();
                self.phase = Phase::EnteringFirst;
            }
            Phase::AwaitingSecond => {
                self.buffer = digit.to_string();
                self.phase = Phase::EnteringSecond;
            }
            Phase::EnteringFirst | Phase::EnteringSecond => {
                if self.buffer == "0" {
                    // No leading zeros
                    if digit != '0' {
                        self.buffer = digit.to_string();
                    }
                } else {
                    self.buffer.push(digit);
                }
            }
        }

        self.debug_check();
    }

    /// Append the locale's decimal separator unless the number has one.
    pub fn add_decimal_point(&mut self) {
        if self.phase == Phase::Error || self.buffer.contains(format::is_separator) {
            return;
        }

        self.buffer.push(self.separator.as_char());
        // The shown result becomes the start of a new first operand
        self.leave_evaluated();
        self.debug_check();
    }

    /// Remove the last typed character.
    pub fn backspace(&mut self) {
        if self.phase == Phase::Error {
            return;
        }
        self.leave_evaluated();

        let digits = self.buffer.strip_prefix('-').unwrap_or(&self.buffer);
        if digits.chars().count() <= 1 {
            self.buffer = "0".to_string();
            return;
        }

        self.buffer.pop();
        if self.buffer.ends_with(format::is_separator) {
            self.buffer.pop();
        }
        if self.buffer == "-0" {
            self.buffer = "0".to_string();
        }

        self.debug_check();
    }

    /// Flip the sign of the shown number. Zero has no sign.
    pub fn toggle_sign(&mut self) {
        if self.phase == Phase::Error || matches!(self.buffer.as_str(), "0" | "0," | "0.") {
            return;
        }

        if self.buffer.starts_with('-') {
            self.buffer.remove(0);
        } else {
            self.buffer.insert(0, '-');
        }
        self.leave_evaluated();
        self.debug_check();
    }

    /// Reset the display and leave any error.
    ///
    /// The pending operation survives, so `=` after a clear applies it to the
    /// newly typed number.
    pub fn clear(&mut self) {
        self.buffer = "0".to_string();
        self.phase = Phase::EnteringFirst;
    }

    /// Choose the operator applied to the shown number on `evaluate`.
    pub fn select_operator(&mut self, operator: Operator) {
        if self.phase == Phase::Error {
            return;
        }
        let Some(first_operand) = self.parse_buffer() else {
            return;
        };

        self.pending = Some(PendingOperation {
            operator,
            first_operand,
        });
        self.phase = Phase::AwaitingSecond;
    }

    /// Apply the pending operation to the first operand and the shown number.
    ///
    /// Does nothing if no operator was chosen. On failure the display shows
    /// the localized error message and only `clear` is accepted.
    pub fn evaluate(&mut self, translator: &impl Translate) {
        if self.phase == Phase::Error {
            return;
        }
        let Some(pending) = self.pending else {
            tracing::debug!("Evaluate without a pending operator");
            return;
        };
        let Some(second_operand) = self.parse_buffer() else {
            return;
        };

        match pending
            .operator
            .apply(pending.first_operand, second_operand)
        {
            Ok(value) => {
                self.buffer = format::format_number(value, self.separator);
                self.phase = Phase::Evaluated;
                self.debug_check();
            }
            Err(err) => self.fail(err, translator),
        }
    }

    /// Switch the separator convention. The buffer is not reformatted;
    /// callers clear the display afterwards.
    pub fn set_locale(&mut self, language: Language) {
        self.separator = language.separator();
    }

    fn fail(&mut self, err: CalcError, translator: &impl Translate) {
        tracing::debug!(error = %err, "Calculation failed");
        self.buffer = translator.lookup(err.message_key());
        self.phase = Phase::Error;
    }

    fn leave_evaluated(&mut self) {
        if self.phase == Phase::Evaluated {
            self.phase = Phase::EnteringFirst;
        }
    }

    fn parse_buffer(&self) -> Option<f64> {
        let value = format::parse_number(&self.buffer, self.separator);
        if value.is_none() {
            tracing::warn!(buffer = %self.buffer, "Display is not a number");
        }
        value
    }

    // The separator may lag behind the locale until the caller clears
    fn debug_check(&self) {
        debug_assert!(
            format::is_well_formed(&self.buffer, DecimalSeparator::Period)
                || format::is_well_formed(&self.buffer, DecimalSeparator::Comma),
            "malformed display {:?}",
            self.buffer
        );
    }
}

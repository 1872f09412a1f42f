//! Snapshot of the screen for rendering.

use super::CalculatorScreen;
use crate::calculator::Operator;
use crate::i18n::Language;

/// Everything a front end needs to draw the calculator.
#[derive(Clone, Debug, PartialEq)]
pub struct ScreenView {
    /// The number being typed, the last result, or an error message.
    pub display: String,
    /// Operator waiting for its second operand.
    pub pending_operator: Option<Operator>,
    /// Whether the display holds an error message.
    pub is_error: bool,
    pub language: Language,
}

impl ScreenView {
    pub fn from_screen(screen: &CalculatorScreen) -> Self {
        Self {
            display: screen.display().to_string(),
            pending_operator: screen.pending_operator(),
            is_error: screen.state().is_error(),
            language: screen.language(),
        }
    }

    /// Text to copy out of the calculator.
    /// Returns `None` when an error message is shown.
    pub fn number(&self) -> Option<&str> {
        (!self.is_error).then_some(self.display.as_str())
    }
}

//! Terminal rendering of the calculator screen.

use crate::i18n::Language;
use crate::screen::{LanguageDialog, LanguagePicker, ScreenView};
use std::fmt::Write as _;
use std::io::{BufRead, Write};

/// Width of the display line, matching a pocket calculator's LCD.
const DISPLAY_WIDTH: usize = 20;

/// Render the display line.
///
/// Shows the language, the pending operator (if any) and the display text
/// right-aligned. Errors are marked with `!` in place of the operator.
pub fn render_display(view: &ScreenView) -> String {
    let indicator = if view.is_error {
        '!'
    } else {
        view.pending_operator.map_or(' ', |op| op.symbol())
    };

    format!(
        "[{}] {} {:>width$}",
        view.language,
        indicator,
        view.display,
        width = DISPLAY_WIDTH
    )
}

/// Render the language dialog with numbered actions.
pub fn render_dialog(dialog: &LanguageDialog) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", dialog.title);
    let _ = writeln!(out, "{}", dialog.message);
    for (i, language) in dialog.actions.iter().enumerate() {
        let _ = writeln!(out, "  {}) {}", i + 1, language.native_name());
    }
    let _ = writeln!(out, "  ⏎) {}", dialog.cancel_button_text);
    out
}

/// Asks for a language on a terminal.
///
/// Accepts the action number, the native name, or a language code. An empty
/// line cancels, as does anything unrecognised.
pub struct TerminalPicker<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPicker<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn choose(dialog: &LanguageDialog, answer: &str) -> Option<Language> {
        if let Ok(n) = answer.parse::<usize>() {
            return n.checked_sub(1).and_then(|i| dialog.actions.get(i)).copied();
        }
        dialog
            .action_by_label(answer)
            .or_else(|| Language::from_code(answer).filter(|l| dialog.actions.contains(l)))
    }
}

impl<R: BufRead, W: Write> LanguagePicker for TerminalPicker<R, W> {
    fn pick(&mut self, dialog: &LanguageDialog) -> Option<Language> {
        let shown = write!(self.output, "{}> ", render_dialog(dialog))
            .and_then(|_| self.output.flush());
        if let Err(e) = shown {
            tracing::warn!("Failed to show language dialog: {}", e);
            return None;
        }

        let mut answer = String::new();
        if let Err(e) = self.input.read_line(&mut answer) {
            tracing::warn!("Failed to read language choice: {}", e);
            return None;
        }

        let answer = answer.trim();
        if answer.is_empty() {
            return None;
        }

        let choice = Self::choose(dialog, answer);
        if choice.is_none() {
            tracing::warn!(answer, "Unrecognised language choice");
        }
        choice
    }
}

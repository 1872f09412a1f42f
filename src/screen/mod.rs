//! The calculator screen: keypad dispatch and language switching.

mod keys;
mod picker;
mod view;

pub use keys::{Key, KeyError, parse_keys};
pub use picker::{LanguageDialog, LanguagePicker};
pub use view::ScreenView;

use crate::calculator::{CalculatorState, Operator};
use crate::i18n::{Language, Translations};

/// What happened when a key was pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The key was handed to the calculator.
    Applied,
    /// The key is disabled in the current state.
    Ignored,
    /// The caller should open the language dialog with
    /// [`CalculatorScreen::change_language`].
    LanguageDialog,
}

/// One calculator session together with its language.
pub struct CalculatorScreen {
    state: CalculatorState,
    translations: Translations,
}

impl CalculatorScreen {
    pub fn new(translations: Translations) -> Self {
        let state = CalculatorState::for_language(translations.active());
        Self {
            state,
            translations,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn display(&self) -> &str {
        self.state.display()
    }

    pub fn language(&self) -> Language {
        self.translations.active()
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.state.pending().map(|pending| pending.operator)
    }

    /// Whether the button for `key` is enabled. After a failed calculation
    /// only `Clear` is.
    pub fn is_enabled(&self, key: Key) -> bool {
        !self.state.is_error() || key == Key::Clear
    }

    /// Press a keypad button.
    pub fn press(&mut self, key: Key) -> KeyOutcome {
        if !self.is_enabled(key) {
            tracing::debug!(?key, "Key disabled");
            return KeyOutcome::Ignored;
        }

        match key {
            Key::Digit(d) => self.state.input_digit(d),
            Key::Decimal => self.state.add_decimal_point(),
            Key::Backspace => self.state.backspace(),
            Key::ToggleSign => self.state.toggle_sign(),
            Key::Clear => self.state.clear(),
            Key::Operator(op) => self.state.select_operator(op),
            Key::Equals => self.state.evaluate(&self.translations),
            Key::Language => return KeyOutcome::LanguageDialog,
        }

        tracing::debug!(?key, phase = ?self.state.phase(), display = %self.state.display(), "Key pressed");
        KeyOutcome::Applied
    }

    /// Show the language dialog and apply the choice.
    ///
    /// Returns `true` if a language was chosen. Choosing a language clears
    /// the display; cancelling leaves everything as it was.
    pub fn change_language(&mut self, picker: &mut impl LanguagePicker) -> bool {
        let dialog = LanguageDialog::localized(&self.translations);
        let Some(language) = picker.pick(&dialog) else {
            tracing::debug!("Language dialog cancelled");
            return false;
        };

        tracing::info!(from = %self.translations.active(), to = %language, "Changing language");
        self.translations.use_language(language);
        self.state.set_locale(language);
        self.state.clear();
        true
    }

    /// Press `keys` in order, asking `picker` whenever the language key is hit.
    pub fn press_all(&mut self, keys: &[Key], picker: &mut impl LanguagePicker) {
        for &key in keys {
            if self.press(key) == KeyOutcome::LanguageDialog {
                self.change_language(picker);
            }
        }
    }

    /// Snapshot of what the screen shows.
    pub fn view(&self) -> ScreenView {
        ScreenView::from_screen(self)
    }
}

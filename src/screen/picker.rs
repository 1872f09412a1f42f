//! The language selection dialog.

use crate::i18n::{Language, Translate, keys};

/// Texts and choices shown in the language dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageDialog {
    pub title: String,
    pub message: String,
    pub cancel_button_text: String,
    /// Offered languages, labelled with their native names.
    pub actions: Vec<Language>,
}

impl LanguageDialog {
    /// Build the dialog in the current language.
    pub fn localized(translator: &impl Translate) -> Self {
        Self {
            title: translator.lookup(keys::DIALOG_TITLE),
            message: translator.lookup(keys::DIALOG_MESSAGE),
            cancel_button_text: translator.lookup(keys::DIALOG_CANCEL_BUTTON_TEXT),
            actions: Language::ALL.to_vec(),
        }
    }

    /// Find the action with the given label.
    pub fn action_by_label(&self, label: &str) -> Option<Language> {
        self.actions
            .iter()
            .copied()
            .find(|language| language.native_name() == label)
    }
}

/// Presents the language dialog to the user.
pub trait LanguagePicker {
    /// Returns the chosen language, or `None` if the dialog was cancelled.
    fn pick(&mut self, dialog: &LanguageDialog) -> Option<Language>;
}

impl<F> LanguagePicker for F
where
    F: FnMut(&LanguageDialog) -> Option<Language>,
{
    fn pick(&mut self, dialog: &LanguageDialog) -> Option<Language> {
        self(dialog)
    }
}

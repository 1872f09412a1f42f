//! Languages and message lookup.
//!
//! This module provides:
//! - The supported application languages and their separator conventions
//! - Detection of the host language from the system locale
//! - String tables embedded in the binary

mod translations;

pub use translations::{I18nError, Translations};

use crate::calculator::DecimalSeparator;
use sys_locale::get_locale;
use thiserror::Error;

/// A language code that is not one of `ru`, `en` or `fr`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unsupported language '{0}' (expected ru, en or fr)")]
pub struct UnknownLanguage(pub String);

/// Message keys present in every string table.
pub mod keys {
    pub const ERROR_MESSAGE: &str = "ERROR_MESSAGE";
    pub const OVERFLOW_MESSAGE: &str = "OVERFLOW_MESSAGE";
    pub const DIALOG_TITLE: &str = "DIALOG_TITLE";
    pub const DIALOG_MESSAGE: &str = "DIALOG_MESSAGE";
    pub const DIALOG_CANCEL_BUTTON_TEXT: &str = "DIALOG_CANCEL_BUTTON_TEXT";

    pub const ALL: [&str; 5] = [
        ERROR_MESSAGE,
        OVERFLOW_MESSAGE,
        DIALOG_TITLE,
        DIALOG_MESSAGE,
        DIALOG_CANCEL_BUTTON_TEXT,
    ];
}

/// Maps a message key to a localized string.
pub trait Translate {
    fn lookup(&self, key: &str) -> String;
}

/// A language the calculator can be switched to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    Russian,
    #[default]
    English,
    French,
}

impl Language {
    /// Languages in the order they are offered in the language dialog.
    pub const ALL: [Language; 3] = [Self::Russian, Self::English, Self::French];

    pub fn code(self) -> &'static str {
        match self {
            Self::Russian => "ru",
            Self::English => "en",
            Self::French => "fr",
        }
    }

    /// Parse a language code or locale name.
    ///
    /// Only the first two letters matter, so `fr_FR.UTF-8` is French.
    pub fn from_code(code: &str) -> Option<Self> {
        let prefix: String = code.chars().take(2).collect::<String>().to_lowercase();
        match prefix.as_str() {
            "ru" => Some(Self::Russian),
            "en" => Some(Self::English),
            "fr" => Some(Self::French),
            _ => None,
        }
    }

    /// Name of the language written in that language.
    pub fn native_name(self) -> &'static str {
        match self {
            Self::Russian => "Русский",
            Self::English => "English",
            Self::French => "Français",
        }
    }

    pub fn separator(self) -> DecimalSeparator {
        DecimalSeparator::for_language(self.code())
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

/// Language of the host, from the system locale.
///
/// Returns `None` if the locale is unknown or its language is not supported.
pub fn device_language() -> Option<Language> {
    language_of_locale(get_locale().as_deref())
}

/// Language of a BCP 47 or POSIX locale name (`fr-FR`, `ru_RU.UTF-8`).
fn language_of_locale(locale: Option<&str>) -> Option<Language> {
    locale
        .filter(|locale| !locale.is_empty())
        .and_then(Language::from_code)
}

//! String tables embedded at compile time.

use super::{Language, Translate};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use thiserror::Error;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Tables;

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("no string table for language '{0}'")]
    MissingTable(Language),
    #[error("invalid string table for language '{language}': {source}")]
    InvalidTable {
        language: Language,
        #[source]
        source: serde_json::Error,
    },
}

/// Localized messages for every supported language.
///
/// Lookups go to the active language first, then to English, and finally
/// return the key itself.
#[derive(Clone, Debug)]
pub struct Translations {
    tables: HashMap<Language, HashMap<String, String>>,
    active: Language,
}

impl Translations {
    /// Load every embedded table and make `active` the current language.
    pub fn load(active: Language) -> Result<Self, I18nError> {
        let mut tables = HashMap::new();

        for language in Language::ALL {
            let file = Tables::get(&format!("{}.json", language.code()))
                .ok_or(I18nError::MissingTable(language))?;
            let table: HashMap<String, String> = serde_json::from_slice(&file.data)
                .map_err(|source| I18nError::InvalidTable { language, source })?;
            tracing::debug!(language = %language, entries = table.len(), "Loaded string table");
            tables.insert(language, table);
        }

        Ok(Self { tables, active })
    }

    pub fn active(&self) -> Language {
        self.active
    }

    /// Switch the language used for lookups.
    pub fn use_language(&mut self, language: Language) {
        self.active = language;
    }

    fn get(&self, language: Language, key: &str) -> Option<&str> {
        self.tables
            .get(&language)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }
}

impl Translate for Translations {
    fn lookup(&self, key: &str) -> String {
        self.get(self.active, key)
            .or_else(|| self.get(Language::English, key))
            .unwrap_or(key)
            .to_string()
    }
}

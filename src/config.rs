//! User configuration.
//!
//! Read from `<config dir>/pocketcalc/config.toml`:
//!
//! ```toml
//! language = "fr"    # overrides the host language
//! log_level = "info" # used when RUST_LOG is not set
//! ```

use crate::i18n::{self, Language, UnknownLanguage};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error(transparent)]
    Language(#[from] UnknownLanguage),
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Language code overriding the host language.
    pub language: Option<String>,
    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Default location of the config file.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pocketcalc").join("config.toml"))
    }

    /// Load the config from `path`, or from the default location.
    ///
    /// A missing file at the default location yields the defaults; a missing
    /// file given explicitly is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), ?config, "Loaded config");
        Ok(config)
    }

    /// Pick the language: `cli` first, then the config file, then the host.
    /// Unsupported host languages fall back to English.
    pub fn resolve_language(&self, cli: Option<Language>) -> Result<Language, ConfigError> {
        if let Some(language) = cli {
            return Ok(language);
        }
        if let Some(code) = &self.language {
            return Ok(code.parse::<Language>()?);
        }
        Ok(i18n::device_language().unwrap_or_default())
    }
}

//! Configuration handling for the scrapers and the matcher.
//!
//! Page URLs and category labels are fixed in [`crate::pipeline`]; the only
//! thing that varies between machines is where the JSON files live, so that
//! is read from the environment with development defaults.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Environment variable names.
pub const ENV_DATA_DIR: &str = "MISCONCEPTIONS_DATA_DIR";
pub const ENV_EN_FILE: &str = "MISCONCEPTIONS_EN_FILE";
pub const ENV_ES_FILE: &str = "MISCONCEPTIONS_ES_FILE";

/// Default values used when environment variables are absent.
const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_EN_FILE: &str = "misconceptions_en.json";
const DEFAULT_ES_FILE: &str = "misconceptions_es.json";

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    data_dir: PathBuf,
    english_file: String,
    spanish_file: String,
}

impl Config {
    /// Create a new config explicitly.
    pub fn new(
        data_dir: impl Into<PathBuf>,
        english_file: impl Into<String>,
        spanish_file: impl Into<String>,
    ) -> Self {
        Self {
            data_dir: data_dir.into(),
            english_file: english_file.into(),
            spanish_file: spanish_file.into(),
        }
    }

    /// Load from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_dir = env::var(ENV_DATA_DIR).unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        let english_file = env::var(ENV_EN_FILE).unwrap_or_else(|_| DEFAULT_EN_FILE.to_string());
        let spanish_file = env::var(ENV_ES_FILE).unwrap_or_else(|_| DEFAULT_ES_FILE.to_string());

        for (field, value) in [
            ("data_dir", &data_dir),
            ("english_file", &english_file),
            ("spanish_file", &spanish_file),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must not be empty".to_string(),
                });
            }
        }

        if english_file == spanish_file {
            return Err(ConfigError::InvalidValue {
                field: "spanish_file",
                reason: format!("must differ from english_file ({})", english_file),
            });
        }

        Ok(Self::new(data_dir, english_file, spanish_file))
    }

    /// Directory holding both JSON files.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the English records file.
    pub fn english_path(&self) -> PathBuf {
        self.data_dir.join(&self.english_file)
    }

    /// Path of the Spanish records file.
    pub fn spanish_path(&self) -> PathBuf {
        self.data_dir.join(&self.spanish_file)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR, DEFAULT_EN_FILE, DEFAULT_ES_FILE)
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}

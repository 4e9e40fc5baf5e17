//! INI Configuration Source
//!
//! Loads connection parameters from a section of an INI file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use ini::{Ini, ParseOption, Properties};

use crate::domain::gateways::DatabaseConfigSource;
use crate::domain::models::DatabaseConfig;
use crate::shared::errors::ConfigurationError;

/// Conventional configuration file name
pub const DEFAULT_CONFIG_PATH: &str = "db.ini";

/// Conventional section name
pub const DEFAULT_SECTION: &str = "db";

/// Values are taken verbatim: no backslash escapes, no quote stripping
fn parse_option() -> ParseOption {
    ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..ParseOption::default()
    }
}

/// Keys are checked in the order username, password, hostname, port, dbname
fn section_to_config(section: &str, props: &Properties) -> Result<DatabaseConfig, ConfigurationError> {
    let require = |key: &'static str| {
        props.get(key).ok_or_else(|| ConfigurationError::MissingKey {
            section: section.to_string(),
            key,
        })
    };

    Ok(DatabaseConfig::new(
        require("username")?,
        require("password")?,
        require("hostname")?,
        require("port")?,
        require("dbname")?,
    ))
}

/// Reads a `[db]`-style section from an INI file
#[derive(Debug, Clone)]
pub struct IniFileConfigSource {
    path: PathBuf,
    section: String,
}

impl IniFileConfigSource {
    /// Create a source reading the `[db]` section of `path`
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            section: DEFAULT_SECTION.to_string(),
        }
    }

    /// Read from a different section name
    #[must_use]
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn section(&self) -> &str {
        &self.section
    }

    fn read_file(&self) -> Result<String, ConfigurationError> {
        std::fs::read_to_string(&self.path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => ConfigurationError::FileNotFound {
                path: self.path.clone(),
            },
            _ => ConfigurationError::Io {
                path: self.path.clone(),
                source,
            },
        })
    }

    /// Parse INI text and extract the configured section.
    ///
    /// Section names match exactly, case included.
    fn parse(&self, contents: &str) -> Result<DatabaseConfig, ConfigurationError> {
        let ini = Ini::load_from_str_opt(contents, parse_option())?;

        let props = ini
            .section(Some(self.section.as_str()))
            .ok_or_else(|| ConfigurationError::MissingSection {
                section: self.section.clone(),
            })?;

        section_to_config(&self.section, props)
    }
}

impl Default for IniFileConfigSource {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_PATH)
    }
}

impl DatabaseConfigSource for IniFileConfigSource {
    fn load(&self) -> Result<DatabaseConfig, ConfigurationError> {
        tracing::debug!(path = %self.path.display(), section = %self.section, "Reading database configuration");

        let contents = zeroize::Zeroizing::new(self.read_file()?);
        let config = self.parse(&contents)?;

        tracing::debug!(path = %self.path.display(), "Database configuration loaded");
        Ok(config)
    }

    fn describe(&self) -> String {
        format!("{}[{}]", self.path.display(), self.section)
    }
}

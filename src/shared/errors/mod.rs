//! Error Types
//!
//! Layered error types: configuration loading, engine construction, and the
//! use-case level error that wraps both.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading the database configuration
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Configuration file '{}' not found", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to read configuration file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] ini::ParseError),

    #[error("Section [{section}] not found in configuration")]
    MissingSection { section: String },

    #[error("Key '{key}' missing from section [{section}]")]
    MissingKey { section: String, key: &'static str },
}

/// Errors raised by the database engine factory
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Database engine error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("No Tokio runtime available for the database engine: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}

/// Use case-level errors
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl ConfigurationError {
    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::FileNotFound { .. } => "FILE_NOT_FOUND",
            Self::Io { .. } => "IO_ERROR",
            Self::Parse(_) => "PARSE_ERROR",
            Self::MissingSection { .. } => "MISSING_SECTION",
            Self::MissingKey { .. } => "MISSING_KEY",
        }
    }
}

impl UseCaseError {
    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration(err) => err.error_code(),
            Self::Engine(EngineError::NoRuntime(_)) => "NO_RUNTIME",
            Self::Engine(EngineError::Database(_)) => "ENGINE_ERROR",
        }
    }
}

//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - INI file configuration
//! - PostgreSQL engine factory

pub mod config;
pub mod database;

pub use config::{IniFileConfigSource, DEFAULT_CONFIG_PATH, DEFAULT_SECTION};
pub use database::PgEngineFactory;

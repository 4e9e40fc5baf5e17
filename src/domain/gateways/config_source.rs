//! Database Configuration Source Gateway
//!
//! Abstract trait for wherever connection parameters come from.

use crate::domain::models::DatabaseConfig;
use crate::shared::errors::ConfigurationError;

/// Source of database connection parameters
pub trait DatabaseConfigSource: Send + Sync {
    /// Load the connection parameters.
    ///
    /// Every call reads the underlying source afresh.
    fn load(&self) -> Result<DatabaseConfig, ConfigurationError>;

    /// Human-readable description of the source, used in log fields
    fn describe(&self) -> String;
}

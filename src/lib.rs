//! Database Connection Configuration
//!
//! Reads PostgreSQL connection parameters from the `[db]` section of an INI
//! file and builds a connection URI or a lazily connecting engine from them.
//!
//! ```no_run
//! # fn main() -> Result<(), db_connection_config::ConfigurationError> {
//! let uri = db_connection_config::build_connection_string(db_connection_config::DEFAULT_CONFIG_PATH)?;
//! println!("{uri}"); // password redacted
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use domain::models::{ConnectionUri, DatabaseConfig};
pub use infrastructure::driven_adapters::DEFAULT_CONFIG_PATH;
pub use infrastructure::driving_adapters::{build_connection_string, connect};
pub use shared::errors::{ConfigurationError, EngineError, UseCaseError};

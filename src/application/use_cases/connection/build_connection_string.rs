//! Build Connection String Use Case
//!
//! Loads the connection parameters and renders them into a connection URI.

use std::sync::Arc;

use crate::domain::gateways::DatabaseConfigSource;
use crate::domain::models::ConnectionUri;
use crate::shared::errors::ConfigurationError;

/// Use case for building a connection URI
#[derive(Clone)]
pub struct BuildConnectionStringUseCase {
    config_source: Arc<dyn DatabaseConfigSource>,
}

impl BuildConnectionStringUseCase {
    /// Create a new `BuildConnectionStringUseCase`
    #[must_use]
    pub fn new(config_source: Arc<dyn DatabaseConfigSource>) -> Self {
        Self { config_source }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if the source is missing, lacks the
    /// section, or lacks any required key.
    pub fn execute(&self) -> Result<ConnectionUri, ConfigurationError> {
        let source = self.config_source.describe();
        tracing::debug!(source = %source, "Building connection string");

        let config = self.config_source.load().inspect_err(|err| {
            tracing::warn!(source = %source, error = %err, "Failed to load database configuration");
        })?;

        let uri = ConnectionUri::from_config(&config);

        tracing::debug!(source = %source, uri = %uri, "Connection string built");
        Ok(uri)
    }
}

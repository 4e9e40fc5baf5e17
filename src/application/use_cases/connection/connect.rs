//! Connect Use Case
//!
//! Builds the connection URI and hands it to an engine factory.

use crate::domain::gateways::EngineFactory;
use crate::shared::errors::UseCaseError;

use super::BuildConnectionStringUseCase;

/// Use case for creating a database engine from configuration
pub struct ConnectUseCase<F> {
    build_connection_string: BuildConnectionStringUseCase,
    engine_factory: F,
}

impl<F: EngineFactory> ConnectUseCase<F> {
    /// Create a new `ConnectUseCase`
    #[must_use]
    pub fn new(build_connection_string: BuildConnectionStringUseCase, engine_factory: F) -> Self {
        Self {
            build_connection_string,
            engine_factory,
        }
    }

    /// Execute the use case
    ///
    /// No connection is opened; the engine connects on first use.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Configuration` if the URI cannot be built.
    /// Returns `UseCaseError::Engine` if the engine rejects the URI.
    pub fn execute(&self) -> Result<F::Engine, UseCaseError> {
        let uri = self.build_connection_string.execute()?;

        let engine = self.engine_factory.create_engine(&uri).inspect_err(|err| {
            tracing::warn!(uri = %uri, error = %err, "Engine rejected connection string");
        })?;

        tracing::info!(uri = %uri, "Database engine created");
        Ok(engine)
    }
}

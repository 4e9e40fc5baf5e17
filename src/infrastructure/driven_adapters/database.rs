//! Database Engine Factory
//!
//! Creates PostgreSQL engines (lazy `sqlx` pools) from connection URIs.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::domain::gateways::EngineFactory;
use crate::domain::models::ConnectionUri;
use crate::shared::errors::EngineError;

/// Builds a [`PgPool`] that connects on first use
#[derive(Debug, Clone, Default)]
pub struct PgEngineFactory;

impl PgEngineFactory {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EngineFactory for PgEngineFactory {
    type Engine = PgPool;

    /// Parse the URI and create the pool without connecting.
    ///
    /// The pool spawns its maintenance task on creation, so a Tokio runtime
    /// must be current; without one this returns `EngineError::NoRuntime`.
    fn create_engine(&self, uri: &ConnectionUri) -> Result<PgPool, EngineError> {
        tokio::runtime::Handle::try_current()?;

        tracing::debug!(uri = %uri, "Creating lazy PostgreSQL pool");
        Ok(PgPoolOptions::new().connect_lazy(uri.as_str())?)
    }
}

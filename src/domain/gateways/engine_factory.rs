//! Engine Factory Gateway
//!
//! Abstract trait for turning a connection URI into a database engine handle.

use crate::domain::models::ConnectionUri;
use crate::shared::errors::EngineError;

/// Factory producing an engine handle from a connection URI
pub trait EngineFactory: Send + Sync {
    /// Engine handle type returned to callers
    type Engine;

    /// Create the engine without opening a connection
    fn create_engine(&self, uri: &ConnectionUri) -> Result<Self::Engine, EngineError>;
}

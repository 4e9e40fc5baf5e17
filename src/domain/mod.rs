//! Domain Layer
//!
//! Connection parameter models and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::{DatabaseConfigSource, EngineFactory};
pub use models::{ConnectionUri, DatabaseConfig};

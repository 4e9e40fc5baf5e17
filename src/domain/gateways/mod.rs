//! Domain Gateways
//!
//! Trait definitions (ports) that infrastructure adapters implement.

pub mod config_source;
pub mod engine_factory;

pub use config_source::DatabaseConfigSource;
pub use engine_factory::EngineFactory;

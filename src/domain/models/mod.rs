//! Domain Models
//!
//! Connection parameters and the URI rendered from them.

pub mod connection_uri;
pub mod database_config;

pub use connection_uri::ConnectionUri;
pub use database_config::DatabaseConfig;

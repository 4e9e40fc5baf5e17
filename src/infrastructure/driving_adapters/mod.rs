//! Driving Adapters
//!
//! Entry points through which callers drive the application.

pub mod connection;

pub use connection::{build_connection_string, connect};

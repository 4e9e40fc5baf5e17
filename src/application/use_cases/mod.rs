//! Use Cases
//!
//! Application-specific rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod connection;

pub use connection::{BuildConnectionStringUseCase, ConnectUseCase};

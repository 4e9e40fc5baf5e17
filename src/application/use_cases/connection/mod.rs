//! Connection Use Cases
//!
//! Building a connection URI from configuration and handing it to an engine.

mod build_connection_string;
mod connect;

pub use build_connection_string::BuildConnectionStringUseCase;
pub use connect::ConnectUseCase;

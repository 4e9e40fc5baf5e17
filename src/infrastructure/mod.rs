//! Infrastructure Layer
//!
//! Contains all external concerns: driving adapters (the public connection
//! functions) and driven adapters (INI configuration, PostgreSQL engine).

pub mod driven_adapters;
pub mod driving_adapters;

//! Database Configuration Model
//!
//! The five connection parameters read from the `[db]` section.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Keys every configuration section must provide, in lookup order
pub const REQUIRED_KEYS: [&str; 5] = ["username", "password", "hostname", "port", "dbname"];

/// Connection parameters for a single database.
///
/// All values are kept verbatim as strings; `port` in particular is not
/// parsed here. The password is wiped from memory on drop and never appears
/// in `Debug` output.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct DatabaseConfig {
    username: String,
    password: String,
    hostname: String,
    port: String,
    dbname: String,
}

impl DatabaseConfig {
    /// Create a new `DatabaseConfig`
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        hostname: impl Into<String>,
        port: impl Into<String>,
        dbname: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            hostname: hostname.into(),
            port: port.into(),
            dbname: dbname.into(),
        }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Raw, unencoded password
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    #[must_use]
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    #[must_use]
    pub fn port(&self) -> &str {
        &self.port
    }

    #[must_use]
    pub fn dbname(&self) -> &str {
        &self.dbname
    }
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("username", &self.username)
            .field("password", &"***")
            .field("hostname", &self.hostname)
            .field("port", &self.port)
            .field("dbname", &self.dbname)
            .finish()
    }
}

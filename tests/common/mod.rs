//! Common test utilities for integration tests
//!
//! Writes INI configuration files into temporary directories and provides a
//! PostgreSQL container for end-to-end connection tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Once;

use tempfile::TempDir;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;

/// Password used by the test container; exercises every reserved character
pub const TEST_PASSWORD: &str = "p@ss:w/rd%";

static TRACING: Once = Once::new();

/// Install a tracing subscriber once per test binary (honours `RUST_LOG`)
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "db_connection_config=debug".into()),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Values for a `[db]` section; `None` leaves the key out
#[derive(Debug, Clone)]
pub struct DbSection {
    pub username: Option<String>,
    pub password: Option<String>,
    pub hostname: Option<String>,
    pub port: Option<String>,
    pub dbname: Option<String>,
}

impl Default for DbSection {
    fn default() -> Self {
        Self {
            username: Some("u".to_string()),
            password: Some("p@ss".to_string()),
            hostname: Some("h".to_string()),
            port: Some("5432".to_string()),
            dbname: Some("d".to_string()),
        }
    }
}

/// A key of the `[db]` section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKey {
    Username,
    Password,
    Hostname,
    Port,
    Dbname,
}

impl DbKey {
    pub const ALL: [DbKey; 5] = [
        DbKey::Username,
        DbKey::Password,
        DbKey::Hostname,
        DbKey::Port,
        DbKey::Dbname,
    ];

    /// Name as written in the INI file
    pub fn name(self) -> &'static str {
        match self {
            DbKey::Username => "username",
            DbKey::Password => "password",
            DbKey::Hostname => "hostname",
            DbKey::Port => "port",
            DbKey::Dbname => "dbname",
        }
    }
}

impl DbSection {
    pub fn without(mut self, key: DbKey) -> Self {
        match key {
            DbKey::Username => self.username = None,
            DbKey::Password => self.password = None,
            DbKey::Hostname => self.hostname = None,
            DbKey::Port => self.port = None,
            DbKey::Dbname => self.dbname = None,
        }
        self
    }

    /// Render as INI text under the given section header
    pub fn to_ini(&self, section: &str) -> String {
        let mut out = format!("[{section}]\n");
        for key in DbKey::ALL {
            let value = match key {
                DbKey::Username => &self.username,
                DbKey::Password => &self.password,
                DbKey::Hostname => &self.hostname,
                DbKey::Port => &self.port,
                DbKey::Dbname => &self.dbname,
            };
            if let Some(value) = value {
                out.push_str(&format!("{} = {value}\n", key.name()));
            }
        }
        out
    }
}

/// A configuration file living in its own temporary directory
pub struct TestConfigFile {
    pub path: PathBuf,
    _dir: TempDir,
}

impl TestConfigFile {
    /// Write `contents` to `db.ini` in a fresh temporary directory
    pub fn new(contents: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("db.ini");
        std::fs::write(&path, contents).expect("Failed to write config file");
        Self { path, _dir: dir }
    }

    pub fn with_section(section: &DbSection) -> Self {
        Self::new(&section.to_ini("db"))
    }
}

/// PostgreSQL container with a config file pointing at it
pub struct TestDatabase {
    pub config: TestConfigFile,
    _container: ContainerAsync<Postgres>,
}

impl TestDatabase {
    /// Start PostgreSQL and write a matching `[db]` section
    pub async fn new() -> Self {
        let container = Postgres::default()
            .with_password(TEST_PASSWORD)
            .with_tag("16-alpine")
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let section = DbSection {
            username: Some("postgres".to_string()),
            password: Some(TEST_PASSWORD.to_string()),
            hostname: Some(host.to_string()),
            port: Some(port.to_string()),
            dbname: Some("postgres".to_string()),
        };

        Self {
            config: TestConfigFile::with_section(&section),
            _container: container,
        }
    }
}

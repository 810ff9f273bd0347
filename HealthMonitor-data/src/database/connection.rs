//! Database connection module for the Health Monitoring System
//!
//! The service keeps its patients, prescriptions and health metrics in a single
//! SQLite file. A [`DatabasePool`] is built once at startup from a
//! [`DatabaseConfig`] and handed to every repository; each repository call checks
//! out one pooled connection and returns it to the pool when the guard drops.

use std::env;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::{Duration, Instant};

use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::OpenFlags;
use tracing::{debug, info};

use super::migrations::run_sqlite_migrations;
use super::DatabaseError;

/// Default location of the SQLite database file
pub const DEFAULT_SQLITE_PATH: &str = "patients.db";

/// How long a connection waits on a locked database before giving up
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Pooled SQLite connection. Dropping it returns the connection to the pool.
pub type SqliteConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// Database configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Path to SQLite database file
    pub sqlite_path: String,
    /// Maximum number of pooled connections
    pub max_connections: u32,
    /// Connection acquisition timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            sqlite_path: DEFAULT_SQLITE_PATH.to_string(),
            max_connections: 10,
            timeout_seconds: 30,
        }
    }
}

impl DatabaseConfig {
    /// Create a new database configuration from environment variables
    pub fn from_env() -> Result<Self, DatabaseError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create a configuration from an arbitrary variable lookup
    ///
    /// Unset variables fall back to [`DatabaseConfig::default`]; set but
    /// unparseable values are rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DatabaseError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let sqlite_path = lookup("DB_SQLITE_PATH")
            .filter(|path| !path.trim().is_empty())
            .unwrap_or(defaults.sqlite_path);

        let max_connections = parse_var(&lookup, "DB_MAX_CONNECTIONS", defaults.max_connections)?;
        if max_connections == 0 {
            return Err(DatabaseError::InvalidConfig {
                name: "DB_MAX_CONNECTIONS".to_string(),
                value: "0".to_string(),
            });
        }

        let timeout_seconds = parse_var(&lookup, "DB_TIMEOUT_SECONDS", defaults.timeout_seconds)?;

        info!(
            "Database configuration: path={}, max_connections={}, timeout={}s",
            sqlite_path, max_connections, timeout_seconds
        );

        Ok(Self {
            sqlite_path,
            max_connections,
            timeout_seconds,
        })
    }
}

fn parse_var<F, T>(lookup: &F, name: &str, default: T) -> Result<T, DatabaseError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(raw) => raw.trim().parse::<T>().map_err(|_| DatabaseError::InvalidConfig {
            name: name.to_string(),
            value: raw,
        }),
        None => Ok(default),
    }
}

/// Snapshot of the pool for health reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolStatus {
    /// Where the database lives (file path or `:memory:`)
    pub location: String,
    /// Connections currently open
    pub connections: u32,
    /// Connections open and idle
    pub idle_connections: u32,
    /// Time taken by the probe query
    pub probe_latency: Duration,
}

/// SQLite connection pool shared by all repositories
#[derive(Clone)]
pub struct DatabasePool {
    pool: r2d2::Pool<SqliteConnectionManager>,
    location: String,
}

impl fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.pool.state();
        f.debug_struct("DatabasePool")
            .field("location", &self.location)
            .field("connections", &state.connections)
            .field("idle_connections", &state.idle_connections)
            .finish()
    }
}

impl DatabasePool {
    /// Open (creating if needed) the SQLite file named in `config` and make
    /// sure the schema exists.
    ///
    /// Any failure here is meant to abort startup.
    pub fn initialize(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let path = Path::new(&config.sqlite_path);
        info!("Initializing SQLite database at: {}", path.display());

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                info!("Creating parent directory: {:?}", parent);
                fs::create_dir_all(parent).map_err(|source| DatabaseError::DirectoryCreation {
                    path: parent.display().to_string(),
                    source,
                })?;
            }
        }

        let manager = SqliteConnectionManager::file(path)
            .with_flags(OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE)
            .with_init(|conn| conn.busy_timeout(BUSY_TIMEOUT));

        let pool = r2d2::Pool::builder()
            .max_size(config.max_connections)
            .connection_timeout(Duration::from_secs(config.timeout_seconds))
            .build(manager)?;

        let db = Self {
            pool,
            location: config.sqlite_path.clone(),
        };
        db.run_migrations()?;

        info!("SQLite connection pool created successfully");
        Ok(db)
    }

    /// Create a pool over a private in-memory database with the schema applied
    pub fn in_memory() -> Result<Self, DatabaseError> {
        // every ":memory:" connection is its own database, so the pool must
        // hold exactly one long-lived connection
        let manager = SqliteConnectionManager::memory();
        let pool = r2d2::Pool::builder()
            .max_size(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .build(manager)?;

        let db = Self {
            pool,
            location: ":memory:".to_string(),
        };
        db.run_migrations()?;

        debug!("In-memory SQLite database initialized");
        Ok(db)
    }

    /// Check out a connection from the pool
    pub fn get(&self) -> Result<SqliteConnection, DatabaseError> {
        Ok(self.pool.get()?)
    }

    /// Where the database lives
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Run a trivial query to prove the database is reachable
    pub fn check(&self) -> Result<PoolStatus, DatabaseError> {
        let started = Instant::now();
        {
            let conn = self.get()?;
            conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
        }
        let probe_latency = started.elapsed();

        let state = self.pool.state();
        Ok(PoolStatus {
            location: self.location.clone(),
            connections: state.connections,
            idle_connections: state.idle_connections,
            probe_latency,
        })
    }

    fn run_migrations(&self) -> Result<(), DatabaseError> {
        let conn = self.get()?;
        run_sqlite_migrations(&conn)
    }
}

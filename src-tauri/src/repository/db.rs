//! Database Connection and Setup
//!
//! Manages SQLite database connection and migrations.

use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::domain::DomainError;

/// Path that selects a private in-memory database
pub const IN_MEMORY: &str = ":memory:";

/// Database state wrapper
#[derive(Clone)]
pub struct DbState {
    conn: Arc<Mutex<Connection>>,
    path: PathBuf,
}

impl DbState {
    /// Shared handle to the single connection
    pub fn connection(&self) -> Arc<Mutex<Connection>> {
        self.conn.clone()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl From<rusqlite::Error> for DomainError {
    fn from(e: rusqlite::Error) -> Self {
        match e {
            rusqlite::Error::QueryReturnedNoRows => DomainError::NotFound("no matching row".to_string()),
            other => DomainError::Internal(other.to_string()),
        }
    }
}

/// Open the database at `db_path` (or in memory) and run migrations
pub fn init_db(db_path: &Path) -> Result<DbState, DomainError> {
    let conn = if db_path == Path::new(IN_MEMORY) {
        Connection::open_in_memory()
    } else {
        Connection::open(db_path)
    }
    .map_err(|e| DomainError::Internal(format!("Failed to open {}: {}", db_path.display(), e)))?;

    conn.busy_timeout(Duration::from_secs(5))?;

    run_migrations(&conn)?;
    log::info!("Database ready at {}", db_path.display());

    Ok(DbState {
        conn: Arc::new(Mutex::new(conn)),
        path: db_path.to_path_buf(),
    })
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> Result<(), DomainError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS todos (
            id TEXT PRIMARY KEY NOT NULL,
            description TEXT NOT NULL,
            completed INTEGER NOT NULL DEFAULT 0,
            favorite INTEGER NOT NULL DEFAULT 0
        )",
        (),
    )
    .map_err(|e| DomainError::Internal(format!("Failed to create todos table: {}", e)))?;

    Ok(())
}

//! App Configuration
//!
//! Where the database and log files live. The database location can be
//! overridden with `TODO_DB_PATH`; everything else comes from Tauri's
//! per-app directories.

use std::path::{Path, PathBuf};
use tauri::{AppHandle, Manager};

use crate::repository::IN_MEMORY;

/// Environment variable overriding the database file
pub const DB_PATH_ENV: &str = "TODO_DB_PATH";

/// Database file name inside the app data directory
pub const DB_FILE_NAME: &str = "todos.db";

/// Base name for log files
pub const LOG_NAME: &str = "Todo";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Resolve from the app handle and the process environment
    pub fn resolve(app_handle: &AppHandle) -> tauri::Result<Self> {
        let data_dir = app_handle.path().app_data_dir()?;
        let log_dir = app_handle.path().app_log_dir()?;
        Ok(Self::from_parts(std::env::var(DB_PATH_ENV).ok(), data_dir, log_dir))
    }

    /// An empty override counts as unset
    pub fn from_parts(db_override: Option<String>, data_dir: PathBuf, log_dir: PathBuf) -> Self {
        let db_path = match db_override {
            Some(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => data_dir.join(DB_FILE_NAME),
        };
        Self { db_path, log_dir }
    }

    /// Create the log directory and the database's parent directory
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.log_dir)?;
        if self.db_path != Path::new(IN_MEMORY) {
            if let Some(parent) = self.db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

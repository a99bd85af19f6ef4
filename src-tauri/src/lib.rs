//! Todo Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - router: The five todo operations
//! - commands: Tauri command handlers

use std::path::PathBuf;
use std::sync::Arc;
use tauri::Manager;

mod config;
mod domain;
mod repository;
mod router;
mod commands;

use config::{AppConfig, LOG_NAME};
use repository::{init_db, DbState, TodoRepository};
use router::TodoRouter;

/// Application state shared across commands
pub struct AppState {
    pub router: TodoRouter,
    pub db_path: PathBuf,
}

impl AppState {
    /// Start file logging, then open the store. Either failure aborts startup.
    fn open(config: &AppConfig) -> Result<Self, Box<dyn std::error::Error>> {
        rolling_logger::init_logger(&config.log_dir, LOG_NAME)?;

        let db_state = match init_db(&config.db_path) {
            Ok(state) => state,
            Err(e) => {
                rolling_logger::error(&format!("DB init failed: {}", e))?;
                return Err(e.into());
            }
        };

        let state = Self::new(&db_state);
        rolling_logger::info(&format!("Serving todos from {}", state.db_path.display()))?;
        Ok(state)
    }

    fn new(db_state: &DbState) -> Self {
        let repo = TodoRepository::new(db_state.connection());
        Self {
            router: TodoRouter::new(Arc::new(repo)),
            db_path: db_state.path().to_path_buf(),
        }
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let config = AppConfig::resolve(app.handle())?;
            config.ensure_dirs()?;

            let state = AppState::open(&config)?;
            app.manage(state);

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::add,
            commands::delete,
            commands::favorite,
            commands::complete,
            commands::get_all_todos,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_fails_when_logger_cannot_start() {
        let root = tempfile::tempdir().unwrap();
        let log_dir = root.path().join("logs");
        std::fs::write(&log_dir, b"not a directory").unwrap();
        let config = AppConfig {
            db_path: root.path().join("todos.db"),
            log_dir,
        };

        assert!(AppState::open(&config).is_err());
        assert!(!config.db_path.exists());
    }
}

//! Tauri Commands for Todos
//!
//! Exposes the todo router to the frontend via Tauri IPC. Argument shapes
//! are checked by Tauri's deserializer before these handlers run.

use tauri::State;
use crate::domain::Todo;
use crate::AppState;

/// Create a new todo
#[tauri::command]
pub async fn add(state: State<'_, AppState>, description: String) -> Result<Todo, String> {
    state.router.add(description).await.map_err(|e| e.to_string())
}

/// Delete a todo, returning the removed row
#[tauri::command]
pub async fn delete(state: State<'_, AppState>, id: String) -> Result<Todo, String> {
    state.router.delete(id).await.map_err(|e| e.to_string())
}

/// Flip the favorite flag the caller currently sees
#[tauri::command]
pub async fn favorite(
    state: State<'_, AppState>,
    id: String,
    favorite: bool,
) -> Result<Todo, String> {
    state.router.favorite(id, favorite).await.map_err(|e| e.to_string())
}

/// Flip the completed flag the caller currently sees
#[tauri::command]
pub async fn complete(
    state: State<'_, AppState>,
    id: String,
    completed: bool,
) -> Result<Todo, String> {
    state.router.complete(id, completed).await.map_err(|e| e.to_string())
}

/// List all todos
#[tauri::command]
pub async fn get_all_todos(state: State<'_, AppState>) -> Result<Vec<Todo>, String> {
    state.router.get_all_todos().await.map_err(|e| e.to_string())
}

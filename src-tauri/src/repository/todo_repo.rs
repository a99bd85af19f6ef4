//! Todo Repository Implementation
//!
//! SQLite-backed implementation of Repository<Todo>.
//! Each operation is one statement; writes use `RETURNING` so the affected
//! row comes back from the same statement.

use async_trait::async_trait;
use rusqlite::{params, Connection, Row};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::{DomainError, DomainResult, NewTodo, Todo, TodoPatch};
use super::traits::Repository;

/// SQLite implementation of Todo repository
pub struct TodoRepository {
    conn: Arc<Mutex<Connection>>,
}

impl TodoRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl Repository<Todo> for TodoRepository {
    async fn insert(&self, draft: NewTodo) -> DomainResult<Todo> {
        let conn = self.conn.lock().await;
        let id = Uuid::new_v4().to_string();

        let todo = conn.query_row(
            "INSERT INTO todos (id, description) VALUES (?1, ?2)
             RETURNING id, description, completed, favorite",
            params![id, draft.description],
            row_to_todo,
        )?;
        Ok(todo)
    }

    async fn delete(&self, id: &String) -> DomainResult<Todo> {
        let conn = self.conn.lock().await;

        conn.query_row(
            "DELETE FROM todos WHERE id = ?1
             RETURNING id, description, completed, favorite",
            params![id],
            row_to_todo,
        )
        .map_err(|e| not_found(e, id))
    }

    async fn update(&self, id: &String, patch: TodoPatch) -> DomainResult<Todo> {
        let conn = self.conn.lock().await;

        // NULL keeps the stored value
        conn.query_row(
            "UPDATE todos
             SET completed = COALESCE(?2, completed), favorite = COALESCE(?3, favorite)
             WHERE id = ?1
             RETURNING id, description, completed, favorite",
            params![id, patch.completed, patch.favorite],
            row_to_todo,
        )
        .map_err(|e| not_found(e, id))
    }

    async fn find_all(&self) -> DomainResult<Vec<Todo>> {
        let conn = self.conn.lock().await;

        let mut stmt = conn.prepare(
            "SELECT id, description, completed, favorite FROM todos ORDER BY rowid ASC",
        )?;
        let todos = stmt
            .query_map((), row_to_todo)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(todos)
    }
}

/// Convert a database row to Todo
fn row_to_todo(row: &Row<'_>) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: row.get(0)?,
        description: row.get(1)?,
        completed: row.get(2)?,
        favorite: row.get(3)?,
    })
}

fn not_found(e: rusqlite::Error, id: &str) -> DomainError {
    match e {
        rusqlite::Error::QueryReturnedNoRows => DomainError::NotFound(format!("Todo {} not found", id)),
        other => other.into(),
    }
}

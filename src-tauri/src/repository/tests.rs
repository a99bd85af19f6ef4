//! Repository Integration Tests
//!
//! Tests for TodoRepository with in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::domain::{DomainError, NewTodo, TodoPatch};
    use crate::repository::{init_db, Repository, TodoRepository, IN_MEMORY};
    use std::path::PathBuf;

    fn setup_test_db() -> TodoRepository {
        // Use in-memory database for tests
        let db_state = init_db(&PathBuf::from(IN_MEMORY)).expect("Failed to init test DB");
        TodoRepository::new(db_state.connection())
    }

    fn draft(description: &str) -> NewTodo {
        NewTodo::new(description.to_string()).expect("valid description")
    }

    #[tokio::test]
    async fn test_insert_todo() {
        let repo = setup_test_db();

        let created = repo.insert(draft("Test todo")).await.expect("Failed to insert");

        assert!(!created.id.is_empty());
        assert_eq!(created.description, "Test todo");
        assert!(!created.completed);
        assert!(!created.favorite);
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let repo = setup_test_db();

        let a = repo.insert(draft("same")).await.unwrap();
        let b = repo.insert(draft("same")).await.unwrap();

        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_find_all_in_insertion_order() {
        let repo = setup_test_db();

        repo.insert(draft("Todo 1")).await.unwrap();
        repo.insert(draft("Todo 2")).await.unwrap();
        repo.insert(draft("Todo 3")).await.unwrap();

        let todos = repo.find_all().await.expect("List failed");
        let descriptions: Vec<_> = todos.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, vec!["Todo 1", "Todo 2", "Todo 3"]);
    }

    #[tokio::test]
    async fn test_update_sets_only_patched_field() {
        let repo = setup_test_db();
        let created = repo.insert(draft("Original")).await.unwrap();

        let updated = repo
            .update(&created.id, TodoPatch::favorite(true))
            .await
            .expect("Update failed");
        assert!(updated.favorite);
        assert!(!updated.completed);

        let updated = repo
            .update(&created.id, TodoPatch::completed(true))
            .await
            .expect("Update failed");
        assert!(updated.favorite);
        assert!(updated.completed);
        assert_eq!(updated.description, "Original");
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found() {
        let repo = setup_test_db();

        let err = repo
            .update(&"missing".to_string(), TodoPatch::completed(true))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_todo() {
        let repo = setup_test_db();
        let created = repo.insert(draft("To delete")).await.unwrap();

        let deleted = repo.delete(&created.id).await.expect("Delete failed");
        assert_eq!(deleted, created);

        let todos = repo.find_all().await.unwrap();
        assert!(todos.is_empty());
    }

    #[tokio::test]
    async fn test_delete_twice_is_not_found() {
        let repo = setup_test_db();
        let created = repo.insert(draft("Once")).await.unwrap();

        repo.delete(&created.id).await.unwrap();
        let err = repo.delete(&created.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_rows_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("todos.db");

        let created = {
            let state = init_db(&db_path).unwrap();
            let repo = TodoRepository::new(state.connection());
            let todo = repo.insert(draft("persisted")).await.unwrap();
            repo.update(&todo.id, TodoPatch::favorite(true)).await.unwrap()
        };

        let state = init_db(&db_path).unwrap();
        assert_eq!(state.path(), db_path.as_path());
        let repo = TodoRepository::new(state.connection());
        assert_eq!(repo.find_all().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_schema_has_exactly_four_columns() {
        let state = init_db(&PathBuf::from(IN_MEMORY)).unwrap();
        let conn = state.connection();
        let conn = conn.lock().await;

        let mut stmt = conn.prepare("PRAGMA table_info(todos)").unwrap();
        let columns: Vec<(String, String, bool)> = stmt
            .query_map([], |row| Ok((row.get(1)?, row.get(2)?, row.get::<_, i64>(3)? == 1)))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(
            columns,
            vec![
                ("id".to_string(), "TEXT".to_string(), true),
                ("description".to_string(), "TEXT".to_string(), true),
                ("completed".to_string(), "INTEGER".to_string(), true),
                ("favorite".to_string(), "INTEGER".to_string(), true),
            ]
        );
    }

    #[tokio::test]
    async fn test_init_db_twice_on_same_file_keeps_schema() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("todos.db");

        init_db(&db_path).unwrap();
        let state = init_db(&db_path).unwrap();
        let repo = TodoRepository::new(state.connection());
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}

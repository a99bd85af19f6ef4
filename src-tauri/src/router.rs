//! Todo Procedure Router
//!
//! The five operations the frontend can call. Each one is a single store
//! call; nothing is retried and store errors are passed through unchanged.
//!
//! `favorite` and `complete` take the value the caller currently sees and
//! store its negation. Two clients (or one stale render) toggling the same
//! row can therefore cancel each other out: the store has no version field
//! to detect that the value changed between the read and the toggle.

use std::sync::Arc;

use crate::domain::{DomainResult, NewTodo, Todo, TodoPatch};
use crate::repository::Repository;

pub struct TodoRouter {
    repo: Arc<dyn Repository<Todo>>,
}

impl TodoRouter {
    pub fn new(repo: Arc<dyn Repository<Todo>>) -> Self {
        Self { repo }
    }

    /// Create a todo with both flags off
    pub async fn add(&self, description: String) -> DomainResult<Todo> {
        log::debug!("add ({} bytes)", description.len());
        let result = async {
            let draft = NewTodo::new(description)?;
            self.repo.insert(draft).await
        }
        .await;
        logged("add", result)
    }

    /// Hard delete, returning the removed row
    pub async fn delete(&self, id: String) -> DomainResult<Todo> {
        log::debug!("delete {}", id);
        logged("delete", self.repo.delete(&id).await)
    }

    /// Store `!favorite`
    pub async fn favorite(&self, id: String, favorite: bool) -> DomainResult<Todo> {
        log::debug!("favorite {} (was {})", id, favorite);
        logged("favorite", self.repo.update(&id, TodoPatch::favorite(!favorite)).await)
    }

    /// Store `!completed`
    pub async fn complete(&self, id: String, completed: bool) -> DomainResult<Todo> {
        log::debug!("complete {} (was {})", id, completed);
        logged("complete", self.repo.update(&id, TodoPatch::completed(!completed)).await)
    }

    /// Every row, unfiltered
    pub async fn get_all_todos(&self) -> DomainResult<Vec<Todo>> {
        log::debug!("get_all_todos");
        logged("get_all_todos", self.repo.find_all().await)
    }
}

fn logged<T>(op: &str, result: DomainResult<T>) -> DomainResult<T> {
    if let Err(e) = &result {
        log::warn!("{} failed: {}", op, e);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::repository::{init_db, TodoRepository, IN_MEMORY};
    use std::path::PathBuf;

    fn setup_router() -> TodoRouter {
        let db_state = init_db(&PathBuf::from(IN_MEMORY)).expect("Failed to init test DB");
        TodoRouter::new(Arc::new(TodoRepository::new(db_state.connection())))
    }

    #[tokio::test]
    async fn test_add_then_list() {
        let router = setup_router();
        let before = router.get_all_todos().await.unwrap().len();

        let created = router.add("write report".to_string()).await.unwrap();

        let todos = router.get_all_todos().await.unwrap();
        assert_eq!(todos.len(), before + 1);
        let found = todos.iter().find(|t| t.id == created.id).unwrap();
        assert_eq!(found.description, "write report");
        assert!(!found.completed);
        assert!(!found.favorite);
    }

    #[tokio::test]
    async fn test_get_all_todos_on_fresh_store_is_empty() {
        let router = setup_router();
        assert_eq!(router.get_all_todos().await.unwrap(), Vec::<Todo>::new());
    }

    #[tokio::test]
    async fn test_add_rejects_empty_description() {
        let router = setup_router();

        let err = router.add(String::new()).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert!(router.get_all_todos().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_accepts_lone_space() {
        let router = setup_router();

        let created = router.add(" ".to_string()).await.unwrap();
        assert_eq!(created.description, " ");
    }

    #[tokio::test]
    async fn test_favorite_stores_inverse_and_round_trips() {
        let router = setup_router();
        let todo = router.add("star me".to_string()).await.unwrap();

        let once = router.favorite(todo.id.clone(), todo.favorite).await.unwrap();
        assert!(once.favorite);

        let twice = router.favorite(todo.id.clone(), once.favorite).await.unwrap();
        assert_eq!(twice.favorite, todo.favorite);
    }

    #[tokio::test]
    async fn test_stale_toggle_is_not_idempotent() {
        let router = setup_router();
        let todo = router.add("race".to_string()).await.unwrap();

        // Two callers both observed `false`; both ask to flip it
        router.complete(todo.id.clone(), false).await.unwrap();
        let second = router.complete(todo.id.clone(), false).await.unwrap();

        assert!(second.completed);
    }

    #[tokio::test]
    async fn test_complete_leaves_favorite_alone() {
        let router = setup_router();
        let todo = router.add("both".to_string()).await.unwrap();
        router.favorite(todo.id.clone(), false).await.unwrap();

        let done = router.complete(todo.id.clone(), false).await.unwrap();
        assert!(done.completed);
        assert!(done.favorite);
    }

    #[tokio::test]
    async fn test_delete_then_delete_again() {
        let router = setup_router();
        let todo = router.add("gone".to_string()).await.unwrap();

        let deleted = router.delete(todo.id.clone()).await.unwrap();
        assert_eq!(deleted.id, todo.id);
        assert!(router.get_all_todos().await.unwrap().iter().all(|t| t.id != todo.id));

        let err = router.delete(todo.id.clone()).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_toggle_after_delete_fails() {
        let router = setup_router();
        let todo = router.add("late click".to_string()).await.unwrap();
        router.delete(todo.id.clone()).await.unwrap();

        let err = router.complete(todo.id.clone(), false).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_buy_milk_scenario() {
        let router = setup_router();

        let milk = router.add("buy milk".to_string()).await.unwrap();
        let todos = router.get_all_todos().await.unwrap();
        assert_eq!(todos.len(), 1);
        assert!(!todos[0].completed && !todos[0].favorite);

        let done = router.complete(milk.id.clone(), false).await.unwrap();
        assert!(done.completed);

        let completed: Vec<_> = router
            .get_all_todos()
            .await
            .unwrap()
            .into_iter()
            .filter(|t| t.completed)
            .collect();
        assert_eq!(completed, vec![done]);

        router.delete(milk.id).await.unwrap();
        assert!(router.get_all_todos().await.unwrap().is_empty());
    }
}

//! Client-side list filter
//!
//! The backend always returns every row; narrowing happens here after the
//! fetch. This is fine while the list stays small.

use crate::models::Todo;

/// Which todos to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShowFilter {
    #[default]
    All,
    Completed,
    Favorited,
}

impl ShowFilter {
    /// Filter buttons, left to right
    pub const BUTTONS: [ShowFilter; 3] = [ShowFilter::Favorited, ShowFilter::Completed, ShowFilter::All];

    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            ShowFilter::All => true,
            ShowFilter::Completed => todo.completed,
            ShowFilter::Favorited => todo.favorite,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShowFilter::All => "Todos",
            ShowFilter::Completed => "Completados",
            ShowFilter::Favorited => "Favoritos",
        }
    }

    /// Extra CSS class for the button while this filter is active
    pub fn active_class(self) -> &'static str {
        match self {
            ShowFilter::All => "active-all",
            ShowFilter::Completed => "active-completed",
            ShowFilter::Favorited => "active-favorited",
        }
    }
}

/// Todos passing `filter`, in their original order
pub fn apply_filter(todos: &[Todo], filter: ShowFilter) -> Vec<Todo> {
    todos.iter().filter(|todo| filter.matches(todo)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: &str, completed: bool, favorite: bool) -> Todo {
        Todo {
            id: id.to_string(),
            description: format!("todo {}", id),
            completed,
            favorite,
        }
    }

    fn sample() -> Vec<Todo> {
        vec![
            todo("1", false, false),
            todo("2", true, false),
            todo("3", false, true),
            todo("4", true, true),
        ]
    }

    fn ids(todos: &[Todo]) -> Vec<&str> {
        todos.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_all_returns_list_unchanged() {
        let todos = sample();
        assert_eq!(apply_filter(&todos, ShowFilter::All), todos);
    }

    #[test]
    fn test_completed_subset() {
        assert_eq!(ids(&apply_filter(&sample(), ShowFilter::Completed)), vec!["2", "4"]);
    }

    #[test]
    fn test_favorited_subset() {
        assert_eq!(ids(&apply_filter(&sample(), ShowFilter::Favorited)), vec!["3", "4"]);
    }

    #[test]
    fn test_empty_list() {
        assert!(apply_filter(&[], ShowFilter::Completed).is_empty());
    }

    #[test]
    fn test_default_is_all() {
        assert_eq!(ShowFilter::default(), ShowFilter::All);
    }
}

//! View selection for the todo list.
//!
//! The display-ready list is derived, never stored: the reducers own what
//! the todos *are*, the selector owns what is currently *visible*. Both
//! sides stay pure, so the view can be recomputed at any time from
//! `(todos, filter)` alone.

use crate::types::{AppState, FilterKind, Todo};
use statefold_core::selector::Selector;

/// Derives the filtered, display-ready list from the todo list and the
/// active filter.
///
/// - `ShowAll`: every todo, in order.
/// - `ShowActive`: the subsequence with `completed == false`, in order.
/// - `ShowCompleted`: the subsequence with `completed == true`, in order.
///
/// The input is borrowed and left untouched; the returned list is a fresh
/// value the caller owns.
#[must_use]
pub fn visible_todos(todos: &[Todo], filter: FilterKind) -> Vec<Todo> {
    match filter {
        FilterKind::ShowAll => todos.to_vec(),
        FilterKind::ShowActive => todos.iter().filter(|t| !t.completed).cloned().collect(),
        FilterKind::ShowCompleted => todos.iter().filter(|t| t.completed).cloned().collect(),
    }
}

/// [`Selector`] over the whole [`AppState`]: applies the state's own filter
/// to its own todo list.
///
/// This is the store-side entry point; [`visible_todos`] is the underlying
/// function of two inputs.
#[derive(Clone, Copy, Debug, Default)]
pub struct VisibleTodos;

impl Selector for VisibleTodos {
    type State = AppState;
    type Output = Vec<Todo>;

    fn select(&self, state: &AppState) -> Vec<Todo> {
        visible_todos(&state.todos, state.visibility_filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TodoId;

    fn mixed_todos() -> Vec<Todo> {
        vec![
            Todo {
                id: TodoId::new(0),
                text: "done".to_string(),
                completed: true,
            },
            Todo::new(TodoId::new(1), "pending".to_string()),
            Todo {
                id: TodoId::new(2),
                text: "also done".to_string(),
                completed: true,
            },
        ]
    }

    #[test]
    fn show_all_is_identity() {
        let todos = mixed_todos();
        assert_eq!(visible_todos(&todos, FilterKind::ShowAll), todos);
    }

    #[test]
    fn show_completed_keeps_order() {
        let visible = visible_todos(&mixed_todos(), FilterKind::ShowCompleted);
        assert_eq!(
            visible.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![TodoId::new(0), TodoId::new(2)]
        );
        assert!(visible.iter().all(|t| t.completed));
    }

    #[test]
    fn show_active_keeps_order() {
        let visible = visible_todos(&mixed_todos(), FilterKind::ShowActive);
        assert_eq!(
            visible.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![TodoId::new(1)]
        );
        assert!(visible.iter().all(|t| !t.completed));
    }

    #[test]
    fn selection_leaves_input_untouched() {
        let todos = mixed_todos();
        let snapshot = todos.clone();

        let _ = visible_todos(&todos, FilterKind::ShowActive);
        let _ = visible_todos(&todos, FilterKind::ShowCompleted);

        assert_eq!(todos, snapshot);
    }

    #[test]
    fn selector_reads_the_state_filter() {
        let state = AppState {
            todos: mixed_todos(),
            visibility_filter: FilterKind::ShowActive,
        };

        assert_eq!(
            VisibleTodos.select(&state),
            visible_todos(&state.todos, FilterKind::ShowActive)
        );
    }

    #[test]
    fn empty_list_selects_empty_under_every_filter() {
        for filter in [
            FilterKind::ShowAll,
            FilterKind::ShowActive,
            FilterKind::ShowCompleted,
        ] {
            assert!(visible_todos(&[], filter).is_empty());
        }
    }
}

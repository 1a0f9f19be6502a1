//! Reducer logic for the todo list.
//!
//! Three slice reducers ([`TodosReducer`], [`VisibilityReducer`]) and their
//! structural composition ([`AppReducer`]). Every reducer here is a total
//! pure function: unrecognized actions fold to a value equal to the input,
//! and the input is never mutated.

use crate::types::{AppState, FilterKind, Todo, TodoAction};
use statefold_core::reducer::Reducer;

/// Folds a single todo action into one todo item.
///
/// - `AddTodo` ignores the prior item and builds the fresh one.
/// - `ToggleTodo` flips `completed` on the matching id and carries every
///   other item through unchanged.
/// - Anything else carries the item through unchanged.
///
/// Only the `AddTodo` branch of [`TodosReducer`] calls this with `None`.
#[must_use]
pub fn reduce_todo(state: Option<&Todo>, action: &TodoAction) -> Option<Todo> {
    match action {
        TodoAction::AddTodo { id, text } => Some(Todo::new(*id, text.clone())),
        TodoAction::ToggleTodo { id } => state.map(|todo| {
            if todo.id == *id {
                todo.toggled()
            } else {
                todo.clone()
            }
        }),
        _ => state.cloned(),
    }
}

/// Reducer for the ordered todo list
///
/// Delegates per-item updates to [`reduce_todo`] and owns the collection
/// shape: append on add, map on toggle, filter on remove. Items are always
/// identified by id equality — positions shift after removal, so index
/// lookups would target the wrong item.
#[derive(Clone, Copy, Debug, Default)]
pub struct TodosReducer;

impl TodosReducer {
    /// Creates a new `TodosReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for TodosReducer {
    type State = Vec<Todo>;
    type Action = TodoAction;

    fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        match action {
            TodoAction::AddTodo { .. } => {
                let mut next = state.clone();
                if let Some(todo) = reduce_todo(None, action) {
                    next.push(todo);
                }
                next
            }
            TodoAction::ToggleTodo { .. } => state
                .iter()
                .filter_map(|todo| reduce_todo(Some(todo), action))
                .collect(),
            TodoAction::RemoveTodo { id } => state
                .iter()
                .filter(|todo| todo.id != *id)
                .cloned()
                .collect(),
            TodoAction::SetVisibilityFilter { .. } => state.clone(),
        }
    }
}

/// Reducer for the active display filter
///
/// Stores whatever filter arrives, verbatim; interpretation is the view
/// selector's job.
#[derive(Clone, Copy, Debug, Default)]
pub struct VisibilityReducer;

impl VisibilityReducer {
    /// Creates a new `VisibilityReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for VisibilityReducer {
    type State = FilterKind;
    type Action = TodoAction;

    fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        match action {
            TodoAction::SetVisibilityFilter { filter } => *filter,
            _ => *state,
        }
    }
}

/// Root reducer composing the todo list and visibility slices
///
/// Each sub-reducer receives the same action and only its own slice of the
/// prior state; neither observes the other's slice. Any slice added to
/// [`AppState`] must follow the same shape: own slice in, own slice out.
#[derive(Clone, Copy, Debug, Default)]
pub struct AppReducer {
    todos: TodosReducer,
    visibility: VisibilityReducer,
}

impl AppReducer {
    /// Creates a new `AppReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self {
            todos: TodosReducer::new(),
            visibility: VisibilityReducer::new(),
        }
    }
}

impl Reducer for AppReducer {
    type State = AppState;
    type Action = TodoAction;

    fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        AppState {
            todos: self.todos.reduce(&state.todos, action),
            visibility_filter: self.visibility.reduce(&state.visibility_filter, action),
        }
    }
}

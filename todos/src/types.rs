//! Domain types for the todo list.
//!
//! The todo list is a plain value domain: every type here is an owned,
//! immutable-by-convention value with no identity beyond its fields. State
//! transitions (in [`crate::reducer`]) always build fresh values; nothing in
//! this module is ever updated in place by the reducers.

use serde::{Deserialize, Serialize};

/// Unique identifier for a todo item
///
/// Ids are caller-supplied: the reducers never generate them, and uniqueness
/// among live todos is the caller's responsibility. [`IdAllocator`] is the
/// id-generation strategy callers are expected to own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TodoId(u64);

impl TodoId {
    /// Creates a `TodoId` from a raw integer
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw integer value
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic id allocator, owned by the caller
///
/// The reducers are pure functions of `(state, action)` and keep no hidden
/// counters; whoever dispatches `AddTodo` owns the next-id bookkeeping.
/// This allocator is that bookkeeping: it hands out `0, 1, 2, …` and is
/// held by the store layer or test harness, never by a reducer.
///
/// # Example
///
/// ```
/// use statefold_todos::types::IdAllocator;
///
/// let mut ids = IdAllocator::new();
/// assert_eq!(ids.allocate().as_u64(), 0);
/// assert_eq!(ids.allocate().as_u64(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    /// Creates an allocator that starts at 0
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    /// Creates an allocator that starts at the given value
    ///
    /// Useful when resuming from a state whose highest live id is known.
    #[must_use]
    pub const fn starting_at(next: u64) -> Self {
        Self { next }
    }

    /// Returns the next id and advances
    pub const fn allocate(&mut self) -> TodoId {
        let id = TodoId::new(self.next);
        self.next += 1;
        id
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier, caller-supplied
    pub id: TodoId,
    /// Text of the todo
    pub text: String,
    /// Whether the todo is completed
    pub completed: bool,
}

impl Todo {
    /// Creates a new todo item, not yet completed
    #[must_use]
    pub const fn new(id: TodoId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }

    /// Returns a fresh copy with `completed` negated
    ///
    /// Identity and text are carried over unchanged; the original value is
    /// untouched.
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            id: self.id,
            text: self.text.clone(),
            completed: !self.completed,
        }
    }
}

/// Display filter for the todo list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterKind {
    /// Show every todo
    #[default]
    ShowAll,
    /// Show only todos not yet completed
    ShowActive,
    /// Show only completed todos
    ShowCompleted,
}

/// Aggregate application state: the todo list plus the active display filter
///
/// Owned exclusively by whatever holds the current state (the store layer);
/// the reducers never retain references to it and every transition returns
/// a fresh value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// Ordered todo list, insertion order preserved
    pub todos: Vec<Todo>,
    /// The active display filter
    pub visibility_filter: FilterKind,
}

impl AppState {
    /// Creates the initial state: no todos, `ShowAll`
    #[must_use]
    pub const fn new() -> Self {
        Self {
            todos: Vec::new(),
            visibility_filter: FilterKind::ShowAll,
        }
    }

    /// Returns the number of todos
    #[must_use]
    pub fn count(&self) -> usize {
        self.todos.len()
    }

    /// Returns the number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }

    /// Returns a todo by id
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Checks whether a todo with the given id exists
    #[must_use]
    pub fn exists(&self, id: TodoId) -> bool {
        self.todos.iter().any(|t| t.id == id)
    }
}

/// Actions: the vocabulary of state-change requests
///
/// The enum is closed, so a structurally malformed action (wrong fields,
/// unknown kind) is unrepresentable — every reducer over this type is total
/// and never needs an error path. Variants are the action constructors;
/// there is no other way to build one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    /// Append a new todo with the given id and text
    ///
    /// The id must be unique among currently-live todos; that is the
    /// caller's contract, not enforced here (see [`IdAllocator`]).
    AddTodo {
        /// Caller-supplied identifier
        id: TodoId,
        /// Text of the new todo
        text: String,
    },

    /// Flip the completed flag of the todo with the given id
    ///
    /// Targets by id equality, never by position. An absent id makes this a
    /// no-op.
    ToggleTodo {
        /// Todo to toggle
        id: TodoId,
    },

    /// Remove the todo with the given id
    ///
    /// Relative order of the remaining todos is preserved. An absent id
    /// makes this a no-op.
    RemoveTodo {
        /// Todo to remove
        id: TodoId,
    },

    /// Replace the active display filter
    ///
    /// Stored verbatim, without validation; only the view selector
    /// interprets it.
    SetVisibilityFilter {
        /// Filter to store
        filter: FilterKind,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_id_display() {
        let id = TodoId::new(7);
        assert_eq!(format!("{id}"), "7");
    }

    #[test]
    fn todo_new_is_not_completed() {
        let todo = Todo::new(TodoId::new(0), "Test todo".to_string());

        assert_eq!(todo.id, TodoId::new(0));
        assert_eq!(todo.text, "Test todo");
        assert!(!todo.completed);
    }

    #[test]
    fn todo_toggled_returns_fresh_value() {
        let todo = Todo::new(TodoId::new(3), "Test".to_string());

        let toggled = todo.toggled();
        assert!(toggled.completed);
        assert_eq!(toggled.id, todo.id);
        assert_eq!(toggled.text, todo.text);

        // Original untouched, double toggle round-trips
        assert!(!todo.completed);
        assert_eq!(toggled.toggled(), todo);
    }

    #[test]
    fn id_allocator_is_monotonic() {
        let mut ids = IdAllocator::starting_at(5);
        assert_eq!(ids.allocate(), TodoId::new(5));
        assert_eq!(ids.allocate(), TodoId::new(6));
    }

    #[test]
    fn app_state_new_is_empty_show_all() {
        let state = AppState::new();
        assert_eq!(state.count(), 0);
        assert_eq!(state.visibility_filter, FilterKind::ShowAll);
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn app_state_lookups() {
        let state = AppState {
            todos: vec![
                Todo::new(TodoId::new(0), "first".to_string()),
                Todo {
                    id: TodoId::new(1),
                    text: "second".to_string(),
                    completed: true,
                },
            ],
            visibility_filter: FilterKind::ShowAll,
        };

        assert_eq!(state.count(), 2);
        assert_eq!(state.completed_count(), 1);
        assert!(state.exists(TodoId::new(1)));
        assert!(!state.exists(TodoId::new(99)));
        assert_eq!(
            state.get(TodoId::new(0)).map(|t| t.text.as_str()),
            Some("first")
        );
    }

    #[test]
    fn filter_kind_default_is_show_all() {
        assert_eq!(FilterKind::default(), FilterKind::ShowAll);
    }

    #[test]
    fn action_serde_round_trip() {
        let action = TodoAction::AddTodo {
            id: TodoId::new(0),
            text: "serialize me".to_string(),
        };

        let json = serde_json::to_string(&action).expect("action serializes");
        let back: TodoAction = serde_json::from_str(&json).expect("action deserializes");
        assert_eq!(back, action);
    }
}

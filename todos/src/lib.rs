//! Todo list domain built on the Statefold architecture.
//!
//! This crate is the classic todo-list state machine, expressed as a pure
//! reducer core:
//!
//! - Closed action vocabulary (add, toggle, remove, set filter)
//! - Slice reducers composed into one root reducer
//! - A view selector deriving the visible list from `(todos, filter)`
//! - Testing with `ReducerTest` and property tests over action sequences
//!
//! # Quick Start
//!
//! ```
//! use statefold_runtime::Store;
//! use statefold_todos::{AppReducer, AppState, FilterKind, IdAllocator, TodoAction};
//! use statefold_todos::selector::visible_todos;
//!
//! # fn main() -> Result<(), statefold_runtime::StoreError> {
//! // The caller owns id generation; the reducers never do.
//! let mut ids = IdAllocator::new();
//! let store = Store::new(AppState::new(), AppReducer::new());
//!
//! // Add a todo and complete it
//! let id = ids.allocate();
//! store.dispatch(TodoAction::AddTodo {
//!     id,
//!     text: "Buy milk".to_string(),
//! })?;
//! store.dispatch(TodoAction::ToggleTodo { id })?;
//!
//! // Derive the visible list
//! let done = store.state(|s| visible_todos(&s.todos, FilterKind::ShowCompleted))?;
//! assert_eq!(done.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod reducer;
pub mod selector;
pub mod types;

// Re-export commonly used types
pub use reducer::{AppReducer, TodosReducer, VisibilityReducer, reduce_todo};
pub use selector::{VisibleTodos, visible_todos};
pub use types::{AppState, FilterKind, IdAllocator, Todo, TodoAction, TodoId};

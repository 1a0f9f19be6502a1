//! # Statefold Core
//!
//! Core traits and types for the Statefold architecture.
//!
//! This crate provides the fundamental abstractions for building applications
//! around a pure, replayable state-transition core: all domain logic lives in
//! reducers, all derived views live in selectors, and everything else (state
//! ownership, observer notification) belongs to the runtime crate.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature, an owned value
//! - **Action**: All possible state-change requests, a closed enum
//! - **Reducer**: Pure function `(&State, &Action) → State`
//! - **Selector**: Pure function `&State → Output` for read-only views
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Fresh state out, prior state untouched
//! - Replay determinism: same actions from the same state, same result
//!
//! ## Example
//!
//! ```
//! use statefold_core::reducer::Reducer;
//!
//! #[derive(Clone, Debug, Default, PartialEq, Eq)]
//! struct TallyState {
//!     total: i64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum TallyAction {
//!     Record(i64),
//! }
//!
//! struct TallyReducer;
//!
//! impl Reducer for TallyReducer {
//!     type State = TallyState;
//!     type Action = TallyAction;
//!
//!     fn reduce(&self, state: &TallyState, action: &TallyAction) -> TallyState {
//!         match action {
//!             TallyAction::Record(n) => TallyState {
//!                 total: state.total + n,
//!             },
//!         }
//!     }
//! }
//!
//! let before = TallyState::default();
//! let after = TallyReducer.reduce(&before, &TallyAction::Record(3));
//! assert_eq!(before, TallyState::default()); // prior value untouched
//! assert_eq!(after.total, 3);
//! ```

// Re-export commonly used types
pub use serde::{Deserialize, Serialize};

pub mod composition;
pub mod selector;

/// Reducer module - The core trait for state transitions
///
/// Reducers are total pure functions: `(&State, &Action) → State`.
///
/// They contain all domain logic, never perform I/O, and never mutate their
/// input. Every call returns a fresh state value; the prior value stays
/// valid and unchanged, which is what makes action replay deterministic.
pub mod reducer {
    /// The Reducer trait - core abstraction for state transitions
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    ///
    /// # Contract
    ///
    /// - Total: every structurally valid action is handled; unrecognized
    ///   actions reduce to a value equal to the input state.
    /// - Pure: no I/O, no hidden dependencies, no retained references.
    /// - Fresh output: the returned state is a new owned value; the input
    ///   is borrowed immutably and left untouched.
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for VisibilityReducer {
    ///     type State = FilterKind;
    ///     type Action = TodoAction;
    ///
    ///     fn reduce(&self, state: &FilterKind, action: &TodoAction) -> FilterKind {
    ///         match action {
    ///             TodoAction::SetVisibilityFilter { filter } => *filter,
    ///             _ => *state,
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// Fold one action into the current state, returning the next state
        ///
        /// # Arguments
        ///
        /// - `state`: Immutable reference to the current state
        /// - `action`: The action to process
        ///
        /// # Returns
        ///
        /// The next state as a fresh owned value
        fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State;
    }
}

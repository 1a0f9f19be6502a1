//! # Counter Example
//!
//! A minimal counter demonstrating the Statefold architecture.
//!
//! This crate showcases:
//! - Pure state machine (no side effects)
//! - Basic reducer implementation
//! - Store usage
//! - State queries
//!
//! The counter is its own sub-domain: it shares the architecture with the
//! todo list but composes with nothing — its state is a single integer.
//!
//! ## Example
//!
//! ```
//! use statefold_counter::{CounterAction, CounterReducer, CounterState};
//! use statefold_runtime::Store;
//!
//! # fn main() -> Result<(), statefold_runtime::StoreError> {
//! let store = Store::new(CounterState::default(), CounterReducer::new());
//!
//! store.dispatch(CounterAction::Increment)?;
//! let count = store.state(|s| s.count)?;
//! assert_eq!(count, 1);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use statefold_core::reducer::Reducer;

/// Counter state
///
/// The state is just a count, default 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterState {
    /// Current count value
    pub count: i64,
}

/// Counter actions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CounterAction {
    /// Increment the counter by 1
    Increment,
    /// Decrement the counter by 1
    Decrement,
}

/// Counter reducer
///
/// A pure function from `(state, action)` to a fresh state; the smallest
/// possible reducer over the smallest possible domain.
#[derive(Clone, Copy, Debug, Default)]
pub struct CounterReducer;

impl CounterReducer {
    /// Create a new counter reducer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;

    fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        match action {
            CounterAction::Increment => CounterState {
                count: state.count + 1,
            },
            CounterAction::Decrement => CounterState {
                count: state.count - 1,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statefold_testing::ReducerTest;

    #[test]
    fn test_increment() {
        ReducerTest::new(CounterReducer::new())
            .given_state(CounterState::default())
            .when_action(CounterAction::Increment)
            .then_state(|state| {
                assert_eq!(state.count, 1);
            })
            .run();
    }

    #[test]
    fn test_decrement() {
        ReducerTest::new(CounterReducer::new())
            .given_state(CounterState { count: 5 })
            .when_action(CounterAction::Decrement)
            .then_state(|state| {
                assert_eq!(state.count, 4);
            })
            .run();
    }

    #[test]
    fn test_multiple_operations() {
        let reducer = CounterReducer::new();
        let state = CounterState::default();

        // Increment twice
        let state = reducer.reduce(&state, &CounterAction::Increment);
        let state = reducer.reduce(&state, &CounterAction::Increment);
        assert_eq!(state.count, 2);

        // Decrement once
        let state = reducer.reduce(&state, &CounterAction::Decrement);
        assert_eq!(state.count, 1);
    }

    #[test]
    fn test_increment_then_decrement_round_trips() {
        let reducer = CounterReducer::new();
        let before = CounterState { count: 42 };

        let after = reducer.reduce(
            &reducer.reduce(&before, &CounterAction::Increment),
            &CounterAction::Decrement,
        );

        assert_eq!(after, before);
    }
}

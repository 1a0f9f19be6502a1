//! Reducer composition utilities
//!
//! This module provides utilities for composing reducers in various ways:
//! - **`combine_reducers`**: Fold an action through several reducers in sequence
//! - **`scope_reducer`**: Focus a reducer on one slice of a larger state
//!
//! `scope_reducer` is the structural law behind root reducers: every slice of
//! the application state is reduced independently by its own sub-reducer,
//! each sub-reducer sees the whole action and only its own slice, and no
//! sub-reducer observes another's state.
//!
//! # Examples
//!
//! ## Combining Reducers
//!
//! ```
//! use statefold_core::reducer::Reducer;
//! use statefold_core::composition::combine_reducers;
//!
//! #[derive(Clone, Default)]
//! struct MyState {
//!     count: i32,
//!     name: String,
//! }
//!
//! enum MyAction {
//!     Increment,
//!     SetName(String),
//! }
//!
//! struct CountReducer;
//! struct NameReducer;
//!
//! impl Reducer for CountReducer {
//!     type State = MyState;
//!     type Action = MyAction;
//!
//!     fn reduce(&self, state: &MyState, action: &MyAction) -> MyState {
//!         match action {
//!             MyAction::Increment => MyState {
//!                 count: state.count + 1,
//!                 ..state.clone()
//!             },
//!             MyAction::SetName(_) => state.clone(),
//!         }
//!     }
//! }
//!
//! impl Reducer for NameReducer {
//!     type State = MyState;
//!     type Action = MyAction;
//!
//!     fn reduce(&self, state: &MyState, action: &MyAction) -> MyState {
//!         match action {
//!             MyAction::SetName(name) => MyState {
//!                 name: name.clone(),
//!                 ..state.clone()
//!             },
//!             MyAction::Increment => state.clone(),
//!         }
//!     }
//! }
//!
//! let combined = combine_reducers(vec![Box::new(CountReducer), Box::new(NameReducer)]);
//! let state = combined.reduce(&MyState::default(), &MyAction::Increment);
//! assert_eq!(state.count, 1);
//! ```

use crate::reducer::Reducer;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer is run in sequence, folding the previous reducer's output
/// forward. This is useful when you want to split reducer logic across
/// multiple implementations.
///
/// With an empty reducer list the combined reducer is the identity: it
/// returns a fresh value equal to the input state.
///
/// # Type Parameters
///
/// - `S`: The state type
/// - `A`: The action type
#[must_use]
pub fn combine_reducers<S, A>(
    reducers: Vec<Box<dyn Reducer<State = S, Action = A>>>,
) -> CombinedReducer<S, A>
where
    S: Clone + 'static,
    A: 'static,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A>
where
    S: Clone + 'static,
    A: 'static,
{
    reducers: Vec<Box<dyn Reducer<State = S, Action = A>>>,
}

impl<S, A> Reducer for CombinedReducer<S, A>
where
    S: Clone + 'static,
    A: 'static,
{
    type State = S;
    type Action = A;

    fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        self.reducers
            .iter()
            .fold(state.clone(), |next, reducer| reducer.reduce(&next, action))
    }
}

/// Scopes a reducer to operate on one slice of a larger state.
///
/// This allows you to reuse reducers designed for smaller state types within
/// a larger application state. The scoped reducer reads its slice through
/// `get_state`, folds the action into it, and writes the fresh slice back
/// into a fresh copy of the parent through `set_state`. Everything outside
/// the slice is carried over unchanged.
///
/// # Type Parameters
///
/// - `S`: The parent state type
/// - `SubS`: The child state type (one slice of `S`)
/// - `A`: The action type
///
/// # Examples
///
/// ```
/// use statefold_core::reducer::Reducer;
/// use statefold_core::composition::scope_reducer;
///
/// #[derive(Clone, Default)]
/// struct CounterState {
///     count: i32,
/// }
///
/// enum CounterAction {
///     Increment,
/// }
///
/// struct CounterReducer;
///
/// impl Reducer for CounterReducer {
///     type State = CounterState;
///     type Action = CounterAction;
///
///     fn reduce(&self, state: &CounterState, action: &CounterAction) -> CounterState {
///         match action {
///             CounterAction::Increment => CounterState {
///                 count: state.count + 1,
///             },
///         }
///     }
/// }
///
/// #[derive(Clone, Default)]
/// struct AppState {
///     counter: CounterState,
///     other_data: String,
/// }
///
/// let scoped = scope_reducer(
///     CounterReducer,
///     |app_state: &AppState| &app_state.counter,
///     |app_state: &mut AppState, counter: CounterState| {
///         app_state.counter = counter;
///     },
/// );
///
/// let state = scoped.reduce(&AppState::default(), &CounterAction::Increment);
/// assert_eq!(state.counter.count, 1);
/// ```
pub fn scope_reducer<S, SubS, A, R>(
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
) -> ScopedReducer<S, SubS, A, R>
where
    S: Clone + 'static,
    SubS: 'static,
    A: 'static,
    R: Reducer<State = SubS, Action = A>,
{
    ScopedReducer {
        reducer,
        get_state,
        set_state,
        _phantom: std::marker::PhantomData,
    }
}

/// A scoped reducer that operates on one slice of state.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, SubS, A, R>
where
    S: Clone + 'static,
    SubS: 'static,
    A: 'static,
    R: Reducer<State = SubS, Action = A>,
{
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
    _phantom: std::marker::PhantomData<A>,
}

impl<S, SubS, A, R> Reducer for ScopedReducer<S, SubS, A, R>
where
    S: Clone + 'static,
    SubS: 'static,
    A: 'static,
    R: Reducer<State = SubS, Action = A>,
{
    type State = S;
    type Action = A;

    fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        // Fold the action into the slice, then graft the fresh slice onto a
        // fresh copy of the parent.
        let next_slice = self.reducer.reduce((self.get_state)(state), action);

        let mut next = state.clone();
        (self.set_state)(&mut next, next_slice);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, Default, PartialEq, Eq)]
    struct TestState {
        counter: i32,
        name: String,
    }

    enum TestAction {
        Increment,
        Decrement,
        SetName(String),
    }

    struct CounterReducer;

    impl Reducer for CounterReducer {
        type State = TestState;
        type Action = TestAction;

        fn reduce(&self, state: &TestState, action: &TestAction) -> TestState {
            match action {
                TestAction::Increment => TestState {
                    counter: state.counter + 1,
                    ..state.clone()
                },
                TestAction::Decrement => TestState {
                    counter: state.counter - 1,
                    ..state.clone()
                },
                TestAction::SetName(_) => state.clone(),
            }
        }
    }

    struct NameReducer;

    impl Reducer for NameReducer {
        type State = TestState;
        type Action = TestAction;

        fn reduce(&self, state: &TestState, action: &TestAction) -> TestState {
            if let TestAction::SetName(name) = action {
                TestState {
                    name: name.clone(),
                    ..state.clone()
                }
            } else {
                state.clone()
            }
        }
    }

    #[test]
    fn test_combine_reducers() {
        let combined = combine_reducers(vec![Box::new(CounterReducer), Box::new(NameReducer)]);

        let state = TestState::default();

        // Counter reducer handles Increment
        let state = combined.reduce(&state, &TestAction::Increment);
        assert_eq!(state.counter, 1);

        // Name reducer handles SetName
        let state = combined.reduce(&state, &TestAction::SetName("Alice".to_string()));
        assert_eq!(state.name, "Alice");

        // Both reducers' work survives further actions
        let state = combined.reduce(&state, &TestAction::Decrement);
        assert_eq!(state.counter, 0);
        assert_eq!(state.name, "Alice");
    }

    #[test]
    fn test_combine_reducers_empty_is_identity() {
        let combined = combine_reducers::<TestState, TestAction>(vec![]);

        let before = TestState {
            counter: 7,
            name: "kept".to_string(),
        };
        let after = combined.reduce(&before, &TestAction::Increment);
        assert_eq!(after, before);
    }

    #[test]
    fn test_combine_reducers_leaves_input_untouched() {
        let combined = combine_reducers(vec![Box::new(CounterReducer), Box::new(NameReducer)]);

        let before = TestState::default();
        let snapshot = before.clone();
        let _ = combined.reduce(&before, &TestAction::Increment);
        assert_eq!(before, snapshot);
    }

    // Scoped reducer tests

    #[derive(Clone, Debug, Default, PartialEq, Eq)]
    struct SubState {
        value: i32,
    }

    enum SubAction {
        Add(i32),
        Multiply(i32),
    }

    struct SubReducer;

    impl Reducer for SubReducer {
        type State = SubState;
        type Action = SubAction;

        fn reduce(&self, state: &SubState, action: &SubAction) -> SubState {
            match action {
                SubAction::Add(n) => SubState {
                    value: state.value + n,
                },
                SubAction::Multiply(n) => SubState {
                    value: state.value * n,
                },
            }
        }
    }

    #[derive(Clone, Debug, Default, PartialEq, Eq)]
    struct ParentState {
        sub: SubState,
        other: String,
    }

    #[test]
    fn test_scope_reducer() {
        let scoped = scope_reducer(
            SubReducer,
            |parent: &ParentState| &parent.sub,
            |parent: &mut ParentState, sub: SubState| {
                parent.sub = sub;
            },
        );

        let state = ParentState {
            sub: SubState { value: 5 },
            other: "test".to_string(),
        };

        let state = scoped.reduce(&state, &SubAction::Add(3));
        assert_eq!(state.sub.value, 8);
        assert_eq!(state.other, "test"); // Other state unchanged

        let state = scoped.reduce(&state, &SubAction::Multiply(2));
        assert_eq!(state.sub.value, 16);
        assert_eq!(state.other, "test");
    }

    #[test]
    fn test_scope_reducer_leaves_input_untouched() {
        let scoped = scope_reducer(
            SubReducer,
            |parent: &ParentState| &parent.sub,
            |parent: &mut ParentState, sub: SubState| {
                parent.sub = sub;
            },
        );

        let before = ParentState {
            sub: SubState { value: 1 },
            other: "pristine".to_string(),
        };
        let snapshot = before.clone();
        let after = scoped.reduce(&before, &SubAction::Add(41));

        assert_eq!(before, snapshot);
        assert_eq!(after.sub.value, 42);
    }
}

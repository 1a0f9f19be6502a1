//! # Statefold Runtime
//!
//! The imperative shell around the pure reducer core: a [`Store`] that owns
//! the current state, folds dispatched actions through a reducer, and
//! notifies subscribers with each fresh state.
//!
//! The reducer core never holds state and never observes who is listening;
//! the store is the single place where "current state" exists. Each dispatch
//! replaces the state wholesale with the reducer's fresh output — the store
//! never patches fields in place.
//!
//! ## Example
//!
//! ```
//! use statefold_core::reducer::Reducer;
//! use statefold_runtime::Store;
//!
//! #[derive(Clone, Debug, Default, PartialEq, Eq)]
//! struct CountState {
//!     count: i64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CountAction {
//!     Increment,
//! }
//!
//! struct CountReducer;
//!
//! impl Reducer for CountReducer {
//!     type State = CountState;
//!     type Action = CountAction;
//!
//!     fn reduce(&self, state: &CountState, action: &CountAction) -> CountState {
//!         match action {
//!             CountAction::Increment => CountState {
//!                 count: state.count + 1,
//!             },
//!         }
//!     }
//! }
//!
//! # fn main() -> Result<(), statefold_runtime::StoreError> {
//! let store = Store::new(CountState::default(), CountReducer);
//! store.dispatch(CountAction::Increment)?;
//! assert_eq!(store.state(|s| s.count)?, 1);
//! # Ok(())
//! # }
//! ```

use statefold_core::reducer::Reducer;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, RwLock};

/// Error type for store operations.
///
/// The reducer core is total and cannot fail; the only failures the store
/// can surface come from its own synchronization primitives.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A lock was poisoned by a panic in another thread (or in a subscriber
    /// callback). The state may be stale; the store should be rebuilt.
    #[error("store lock poisoned")]
    Poisoned,
}

/// Identifier handed out by [`Store::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber<S> = Box<dyn Fn(&S) + Send + Sync>;

/// The Store - runtime coordinator for a reducer
///
/// The Store manages:
/// 1. State (behind `RwLock` for concurrent read access)
/// 2. Reducer (domain logic)
/// 3. Subscribers (observers notified with each fresh state)
///
/// # Type Parameters
///
/// - `R`: Reducer implementation; its associated types fix the state and
///   action types the store works with
///
/// # Example
///
/// ```ignore
/// let store = Store::new(AppState::default(), AppReducer::new());
///
/// store.dispatch(TodoAction::AddTodo {
///     id: TodoId::new(0),
///     text: "learn reducers".to_string(),
/// })?;
/// ```
pub struct Store<R>
where
    R: Reducer,
{
    state: RwLock<R::State>,
    reducer: R,
    subscribers: Mutex<Vec<(SubscriptionId, Subscriber<R::State>)>>,
    next_subscription: AtomicU64,
}

impl<R> Store<R>
where
    R: Reducer,
{
    /// Create a new store with an initial state and a reducer
    ///
    /// # Arguments
    ///
    /// - `initial_state`: The starting state for the store
    /// - `reducer`: The reducer implementation (domain logic)
    #[must_use]
    pub fn new(initial_state: R::State, reducer: R) -> Self {
        Self {
            state: RwLock::new(initial_state),
            reducer,
            subscribers: Mutex::new(Vec::new()),
            next_subscription: AtomicU64::new(0),
        }
    }

    /// Dispatch an action to the store
    ///
    /// This is the sole state-transition entry point:
    /// 1. Acquires the write lock on state
    /// 2. Folds the reducer over `(current state, action)`
    /// 3. Replaces the state wholesale with the fresh value
    /// 4. Notifies subscribers, in subscription order, with the fresh state
    ///
    /// The reducer runs while the write lock is held; subscriber callbacks
    /// run after it is released.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Poisoned`] if the state lock or the subscriber
    /// list lock was poisoned by an earlier panic.
    #[tracing::instrument(skip(self, action), name = "store_dispatch")]
    pub fn dispatch(&self, action: R::Action) -> Result<(), StoreError> {
        {
            let mut guard = self.state.write().map_err(|_| StoreError::Poisoned)?;
            *guard = self.reducer.reduce(&guard, &action);
        }

        self.notify()
    }

    /// Read from the current state
    ///
    /// The closure receives a reference to the state under the read lock and
    /// returns whatever it extracts. Keep the closure small; it should pull
    /// a value out, not hold the borrow.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let count = store.state(|s| s.todos.len())?;
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Poisoned`] if the state lock was poisoned.
    pub fn state<T>(&self, f: impl FnOnce(&R::State) -> T) -> Result<T, StoreError> {
        let guard = self.state.read().map_err(|_| StoreError::Poisoned)?;
        Ok(f(&guard))
    }

    /// Register a subscriber notified after every dispatch
    ///
    /// The callback receives the fresh state each time an action has been
    /// folded in. Callbacks must not call back into this store; the
    /// subscriber list lock is held while they run.
    ///
    /// Returns a [`SubscriptionId`] to pass to [`Store::unsubscribe`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Poisoned`] if the subscriber list lock was
    /// poisoned.
    pub fn subscribe(
        &self,
        callback: impl Fn(&R::State) + Send + Sync + 'static,
    ) -> Result<SubscriptionId, StoreError> {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));

        let mut subscribers = self.subscribers.lock().map_err(|_| StoreError::Poisoned)?;
        subscribers.push((id, Box::new(callback)));

        Ok(id)
    }

    /// Remove a subscriber
    ///
    /// Returns `true` if the subscription existed and was removed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Poisoned`] if the subscriber list lock was
    /// poisoned.
    pub fn unsubscribe(&self, id: SubscriptionId) -> Result<bool, StoreError> {
        let mut subscribers = self.subscribers.lock().map_err(|_| StoreError::Poisoned)?;
        let before = subscribers.len();
        subscribers.retain(|(sub_id, _)| *sub_id != id);
        Ok(subscribers.len() != before)
    }

    /// Consume the store and return the final state
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Poisoned`] if the state lock was poisoned.
    pub fn into_state(self) -> Result<R::State, StoreError> {
        self.state.into_inner().map_err(|_| StoreError::Poisoned)
    }

    fn notify(&self) -> Result<(), StoreError> {
        let subscribers = self.subscribers.lock().map_err(|_| StoreError::Poisoned)?;
        if subscribers.is_empty() {
            return Ok(());
        }

        let guard = self.state.read().map_err(|_| StoreError::Poisoned)?;
        for (_, callback) in subscribers.iter() {
            callback(&guard);
        }

        Ok(())
    }
}

impl<R> std::fmt::Debug for Store<R>
where
    R: Reducer + std::fmt::Debug,
    R::State: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("reducer", &self.reducer)
            .finish_non_exhaustive()
    }
}

//! Selector system for deriving read-only views from state.
//!
//! # Overview
//!
//! Selectors are the **query side** of the architecture. While reducers
//! handle the write side (actions → fresh state), selectors handle the read
//! side (state → display-ready views). They never mutate state and never
//! feed back into it.
//!
//! ## Key Concepts
//!
//! - **Selector**: Transforms current state into a derived view
//! - **Recomputable**: A selector's output is purely a function of its
//!   inputs, so it can be called repeatedly in any order with no caching
//!   or memoization requirement
//! - **No ownership**: Selectors borrow state; the returned view is a fresh
//!   value the caller owns
//!
//! ## Example
//!
//! ```
//! use statefold_core::selector::Selector;
//!
//! #[derive(Clone)]
//! struct Inventory {
//!     items: Vec<(String, u32)>,
//! }
//!
//! struct InStock;
//!
//! impl Selector for InStock {
//!     type State = Inventory;
//!     type Output = Vec<String>;
//!
//!     fn select(&self, state: &Inventory) -> Vec<String> {
//!         state
//!             .items
//!             .iter()
//!             .filter(|(_, count)| *count > 0)
//!             .map(|(name, _)| name.clone())
//!             .collect()
//!     }
//! }
//!
//! let inventory = Inventory {
//!     items: vec![("apples".into(), 3), ("pears".into(), 0)],
//! };
//! assert_eq!(InStock.select(&inventory), vec!["apples".to_string()]);
//! ```

/// A selector derives a read-only view from state.
///
/// # Contract
///
/// - Pure: the output depends only on the input state (plus any fixed
///   parameters the selector value itself carries).
/// - Non-mutating: the state is borrowed immutably and left untouched.
/// - Order-free: repeated calls, in any order, produce equal outputs for
///   equal inputs.
pub trait Selector {
    /// The state type this selector reads from.
    type State;

    /// The derived view type this selector produces.
    type Output;

    /// Derive the view from the current state.
    fn select(&self, state: &Self::State) -> Self::Output;
}

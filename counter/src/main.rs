//! Counter example binary
//!
//! Demonstrates the Statefold architecture with a simple counter.

use statefold_counter::{CounterAction, CounterReducer, CounterState};
use statefold_runtime::Store;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "counter=debug,statefold_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Counter Example: Statefold Architecture ===\n");

    // Create store with initial state and reducer
    let store = Store::new(CounterState::default(), CounterReducer::new());

    // Watch every fresh state go by
    store.subscribe(|state: &CounterState| {
        tracing::debug!(count = state.count, "state replaced");
    })?;

    // Initial state
    let count = store.state(|s| s.count)?;
    println!("Initial count: {count}");

    for _ in 0..3 {
        println!("\n>>> Dispatching: Increment");
        store.dispatch(CounterAction::Increment)?;
        let count = store.state(|s| s.count)?;
        println!("Count after Increment: {count}");
    }

    println!("\n>>> Dispatching: Decrement");
    store.dispatch(CounterAction::Decrement)?;
    let count = store.state(|s| s.count)?;
    println!("Count after Decrement: {count}");

    println!("\n=== Architecture Demonstration Complete ===");
    println!("\nKey concepts demonstrated:");
    println!("  • State: CounterState (domain data)");
    println!("  • Action: CounterAction (state-change requests)");
    println!("  • Reducer: Pure function (state, action) → fresh state");
    println!("  • Store: Runtime that holds state and notifies observers");

    Ok(())
}

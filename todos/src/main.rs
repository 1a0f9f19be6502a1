//! Simple CLI demo for the todo domain.
//!
//! Dispatches a scripted sequence of actions through a store and prints the
//! visible list under each filter.

use statefold_runtime::Store;
use statefold_todos::selector::visible_todos;
use statefold_todos::{AppReducer, AppState, FilterKind, IdAllocator, Todo, TodoAction};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_todos(label: &str, todos: &[Todo]) {
    println!("{label}:");
    for todo in todos {
        let status = if todo.completed { "✓" } else { " " };
        println!("  [{}] #{} {}", status, todo.id, todo.text);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todos=debug,statefold_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Todos Example ===\n");

    // The demo owns id generation; the reducers only ever see the ids.
    let mut ids = IdAllocator::new();
    let store = Store::new(AppState::new(), AppReducer::new());

    // Watch every fresh state go by
    store.subscribe(|state: &AppState| {
        tracing::debug!(
            todos = state.count(),
            filter = ?state.visibility_filter,
            "state replaced"
        );
    })?;

    // Create some todos
    let milk = ids.allocate();
    let docs = ids.allocate();
    let deploy = ids.allocate();

    println!("Creating todos...");
    store.dispatch(TodoAction::AddTodo {
        id: milk,
        text: "Buy milk".to_string(),
    })?;
    store.dispatch(TodoAction::AddTodo {
        id: docs,
        text: "Write documentation".to_string(),
    })?;
    store.dispatch(TodoAction::AddTodo {
        id: deploy,
        text: "Deploy to production".to_string(),
    })?;

    let state = store.state(Clone::clone)?;
    println!("\nTodos created: {}", state.count());
    print_todos("All", &state.todos);

    // Complete one todo
    println!("\nCompleting 'Buy milk'...");
    store.dispatch(TodoAction::ToggleTodo { id: milk })?;

    // Derive the view under each filter
    let state = store.state(Clone::clone)?;
    println!(
        "\nCompleted: {}/{}",
        state.completed_count(),
        state.count()
    );
    print_todos(
        "Active",
        &visible_todos(&state.todos, FilterKind::ShowActive),
    );
    print_todos(
        "Completed",
        &visible_todos(&state.todos, FilterKind::ShowCompleted),
    );

    // Switch the stored filter; todos are untouched
    println!("\nSwitching filter to ShowActive...");
    store.dispatch(TodoAction::SetVisibilityFilter {
        filter: FilterKind::ShowActive,
    })?;

    // Remove a todo
    println!("Removing 'Deploy to production'...");
    store.dispatch(TodoAction::RemoveTodo { id: deploy })?;

    // Final state: the selector applies the stored filter
    let state = store.state(Clone::clone)?;
    print_todos(
        "\nVisible under stored filter",
        &visible_todos(&state.todos, state.visibility_filter),
    );
    println!("\nTotal remaining: {}", state.count());

    println!("\n=== Demo Complete ===");
    Ok(())
}

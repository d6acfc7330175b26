//! Application state for Axum handlers.

use std::sync::Arc;
use taskpad_core::environment::SystemClock;
use taskpad_core::store::{MemoryTodoStore, TodoStore};

/// Application state shared across all HTTP handlers.
///
/// Holds the document store behind a trait object; the API layer itself
/// keeps no state between requests.
#[derive(Clone)]
pub struct AppState {
    /// The todo document store.
    pub todos: Arc<dyn TodoStore>,
}

impl AppState {
    /// Create state over an existing store.
    #[must_use]
    pub fn new(todos: Arc<dyn TodoStore>) -> Self {
        Self { todos }
    }

    /// Create state over a fresh in-memory store with the system clock.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTodoStore::new(Arc::new(SystemClock))))
    }
}

//! # Taskpad Client
//!
//! Reducer-driven client view for the Taskpad task tracker.
//!
//! The view is modeled as a pure state machine: a [`reducer::TodoListReducer`]
//! turns user intents and server confirmations into state changes plus effect
//! descriptions, a [`store::ViewStore`] drives those effects, and all I/O is
//! injected through the [`api::TodoApi`] trait so the whole view can be
//! exercised without a network.
//!
//! ```text
//! intent ──▶ reducer ──▶ Effect::Future(api call) ──▶ confirmation ──▶ reducer
//!              │                                                        │
//!              └──────────────── TodoListState ◀────────────────────────┘
//! ```
//!
//! The list is never mutated speculatively: every splice (prepend, replace,
//! filter) happens on a confirmation action carrying the server's record.

pub mod api;
pub mod reducer;
pub mod session;
pub mod store;
pub mod types;

pub use api::{ApiError, HttpTodoApi, TodoApi};
pub use reducer::{TodoListEnvironment, TodoListReducer};
pub use session::{FileSessionStorage, MemorySessionStorage, Session, SessionStorage};
pub use store::ViewStore;
pub use types::{Notification, TodoForm, TodoListAction, TodoListState};

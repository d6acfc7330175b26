//! # Taskpad Core
//!
//! Domain model and core abstractions for the Taskpad task tracker.
//!
//! This crate provides:
//!
//! - The [`todo`] module: the `Todo` record, its field enums, and the
//!   creation/partial-update input types.
//! - The [`store`] module: the document-store contract ([`store::TodoStore`])
//!   and the in-memory backend.
//! - Reducer primitives ([`reducer::Reducer`], [`effect::Effect`],
//!   [`environment::Clock`]) used by the client view.
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Explicit effects (no hidden I/O in reducers)
//! - Dependency injection via environment traits
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use taskpad_core::environment::SystemClock;
//! use taskpad_core::store::{MemoryTodoStore, TodoStore};
//! use taskpad_core::todo::NewTodo;
//!
//! # async fn example() -> Result<(), taskpad_core::store::StoreError> {
//! let store = MemoryTodoStore::new(Arc::new(SystemClock));
//!
//! let todo = store
//!     .insert(NewTodo::new("Buy milk").with_description("2 liters"))
//!     .await?;
//!
//! assert_eq!(todo.title, "Buy milk");
//! # Ok(())
//! # }
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use smallvec::SmallVec;

pub mod store;
pub mod todo;

/// Reducer module - the core trait for view logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`.
/// They contain all view-state transitions and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The number of effects a reducer can return without allocating.
    pub const INLINE_EFFECTS: usize = 4;

    /// The Reducer trait - core abstraction for view logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for TodoListReducer {
    ///     type State = TodoListState;
    ///     type Action = TodoListAction;
    ///     type Environment = TodoListEnvironment;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut TodoListState,
    ///         action: TodoListAction,
    ///         env: &TodoListEnvironment,
    ///     ) -> SmallVec<[Effect<TodoListAction>; 4]> {
    ///         match action {
    ///             TodoListAction::Load => { /* produce a fetch effect */ }
    ///             _ => SmallVec::new(),
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Validates the action
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed by the runtime
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; INLINE_EFFECTS]>;
    }
}

/// Effect module - side effect descriptions
///
/// Effects describe side effects to be performed by a runtime. They are
/// values (not execution): a reducer returns them, the runtime drives them.
pub mod effect {
    use std::future::Future;
    use std::pin::Pin;

    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what
    /// should happen, returned from reducers and executed by the runtime.
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Arbitrary async computation
        ///
        /// Returns `Option<Action>` - if `Some`, the action is fed back into
        /// the reducer.
        Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
    }

    impl<Action> Effect<Action> {
        /// Wrap a future producing a feedback action.
        pub fn future<F>(fut: F) -> Self
        where
            F: Future<Output = Option<Action>> + Send + 'static,
        {
            Self::Future(Box::pin(fut))
        }
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }
}

/// Environment module - dependency injection traits
///
/// External dependencies are abstracted behind traits and injected via an
/// environment parameter, so that domain logic stays deterministic in tests.
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Clock trait - abstracts time operations for testability
    ///
    /// Production code uses [`SystemClock`]; tests inject fixed or stepping
    /// clocks (see the `taskpad-testing` crate).
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }
}

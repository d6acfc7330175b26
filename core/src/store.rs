//! Document store contract for todo records.
//!
//! The store is a mapping from id to record. The trait is deliberately
//! minimal: insert, point lookup, partial update, status toggle, delete, and
//! a full-scan list ordered by creation time descending.
//!
//! # Atomicity
//!
//! Update, toggle, and remove are conditional operations: they act only on an
//! existing record and report [`StoreError::NotFound`] otherwise. Callers
//! never pre-check existence with a separate lookup, so there is no window
//! between "found it" and "changed it" within a single operation.
//!
//! # Implementations
//!
//! - [`MemoryTodoStore`]: the in-process document collection, also used by
//!   tests.
//!
//! # Dyn Compatibility
//!
//! The trait uses explicit `Pin<Box<dyn Future>>` returns instead of
//! `async fn` so handlers can hold an `Arc<dyn TodoStore>`.

use crate::todo::{FieldError, NewTodo, Todo, TodoId, TodoPatch};
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

mod memory;

pub use memory::MemoryTodoStore;

/// Boxed future returned by store operations.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + Send + 'a>>;

/// Errors that can occur during store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A document failed field validation and was not persisted.
    #[error("Validation failed: {}", format_fields(.0))]
    Validation(Vec<FieldError>),

    /// No record with the given id exists.
    #[error("Todo not found: {0}")]
    NotFound(TodoId),

    /// Unexpected persistence failure. The detail is logged server-side and
    /// never forwarded to callers.
    #[error("Store backend error: {0}")]
    Backend(String),
}

fn format_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.msg))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Document store abstraction for todo records.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so they can be shared across
/// request handlers.
pub trait TodoStore: Send + Sync {
    /// Insert a new record.
    ///
    /// The store assigns the id and creation time, applies defaults for
    /// unset status/priority (`pending`/`medium`), and persists status as
    /// `pending` unconditionally.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Validation`]: missing or blank title; nothing is
    ///   persisted.
    /// - [`StoreError::Backend`]: persistence failed.
    fn insert(&self, input: NewTodo) -> StoreFuture<'_, Todo>;

    /// Point lookup by id.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`]: no record with this id.
    /// - [`StoreError::Backend`]: persistence failed.
    fn find(&self, id: TodoId) -> StoreFuture<'_, Todo>;

    /// Partial update: merge the set fields of `patch` into the record,
    /// leaving the rest untouched, and return the post-update record.
    ///
    /// An empty patch returns the record unchanged.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`]: no record with this id; nothing changed.
    /// - [`StoreError::Validation`]: the patch would blank the title.
    /// - [`StoreError::Backend`]: persistence failed.
    fn update(&self, id: TodoId, patch: TodoPatch) -> StoreFuture<'_, Todo>;

    /// Flip the status of a record under the store's lock and return the
    /// post-toggle record. `pending` becomes `done`; anything else becomes
    /// `pending`.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`]: no record with this id.
    /// - [`StoreError::Backend`]: persistence failed.
    fn toggle(&self, id: TodoId) -> StoreFuture<'_, Todo>;

    /// Hard delete by id. No tombstone is kept.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`]: no record with this id.
    /// - [`StoreError::Backend`]: persistence failed.
    fn remove(&self, id: TodoId) -> StoreFuture<'_, ()>;

    /// All records, ordered by creation time descending. Records created at
    /// the same instant are ordered newest-inserted first.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Backend`]: persistence failed.
    fn list(&self) -> StoreFuture<'_, Vec<Todo>>;
}

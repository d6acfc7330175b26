//! In-memory document collection.

use super::{StoreError, StoreFuture, TodoStore};
use crate::environment::Clock;
use crate::todo::{NewTodo, Status, Todo, TodoId, TodoPatch};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A stored document plus its insertion sequence number.
///
/// The sequence breaks ordering ties between records created at the same
/// instant, which happens routinely under a fixed test clock.
#[derive(Clone, Debug)]
struct Entry {
    seq: u64,
    todo: Todo,
}

#[derive(Debug, Default)]
struct Inner {
    next_seq: u64,
    docs: HashMap<TodoId, Entry>,
}

/// The in-process document collection holding todo records.
///
/// State lives behind a `tokio::sync::RwLock`; every operation acquires the
/// lock once, so update/toggle/remove are atomic conditional operations with
/// no check-then-act window.
pub struct MemoryTodoStore {
    clock: Arc<dyn Clock>,
    inner: RwLock<Inner>,
}

impl MemoryTodoStore {
    /// Creates an empty store using the given clock for creation times.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Number of records currently held.
    pub async fn len(&self) -> usize {
        self.inner.read().await.docs.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.docs.is_empty()
    }
}

impl TodoStore for MemoryTodoStore {
    fn insert(&self, input: NewTodo) -> StoreFuture<'_, Todo> {
        Box::pin(async move {
            input.validate().map_err(StoreError::Validation)?;

            let todo = Todo {
                id: TodoId::new(),
                owner: input.owner,
                title: input.title,
                description: input.description,
                // Status is forced to pending on creation, whatever the
                // caller sent.
                status: Status::Pending,
                priority: input.priority.unwrap_or_default(),
                created_at: self.clock.now(),
            };

            let mut inner = self.inner.write().await;
            let seq = inner.next_seq;
            inner.next_seq += 1;
            inner.docs.insert(
                todo.id.clone(),
                Entry {
                    seq,
                    todo: todo.clone(),
                },
            );

            Ok(todo)
        })
    }

    fn find(&self, id: TodoId) -> StoreFuture<'_, Todo> {
        Box::pin(async move {
            let inner = self.inner.read().await;
            inner
                .docs
                .get(&id)
                .map(|entry| entry.todo.clone())
                .ok_or(StoreError::NotFound(id))
        })
    }

    fn update(&self, id: TodoId, patch: TodoPatch) -> StoreFuture<'_, Todo> {
        Box::pin(async move {
            patch.validate().map_err(StoreError::Validation)?;

            let mut inner = self.inner.write().await;
            let Some(entry) = inner.docs.get_mut(&id) else {
                return Err(StoreError::NotFound(id));
            };

            patch.apply_to(&mut entry.todo);
            Ok(entry.todo.clone())
        })
    }

    fn toggle(&self, id: TodoId) -> StoreFuture<'_, Todo> {
        Box::pin(async move {
            let mut inner = self.inner.write().await;
            let Some(entry) = inner.docs.get_mut(&id) else {
                return Err(StoreError::NotFound(id));
            };

            entry.todo.status = entry.todo.status.toggled();
            Ok(entry.todo.clone())
        })
    }

    fn remove(&self, id: TodoId) -> StoreFuture<'_, ()> {
        Box::pin(async move {
            let mut inner = self.inner.write().await;
            match inner.docs.remove(&id) {
                Some(_) => Ok(()),
                None => Err(StoreError::NotFound(id)),
            }
        })
    }

    fn list(&self) -> StoreFuture<'_, Vec<Todo>> {
        Box::pin(async move {
            let inner = self.inner.read().await;
            let mut entries: Vec<&Entry> = inner.docs.values().collect();
            entries.sort_by(|a, b| {
                b.todo
                    .created_at
                    .cmp(&a.todo.created_at)
                    .then(b.seq.cmp(&a.seq))
            });
            Ok(entries.into_iter().map(|entry| entry.todo.clone()).collect())
        })
    }
}

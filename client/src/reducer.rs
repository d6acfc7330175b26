//! State transitions for the todo list view.
//!
//! [`TodoListReducer`] is pure: it mutates state, and describes I/O as
//! effects that resolve to confirmation actions. The list of todos changes
//! only when a confirmation arrives, so the view always shows what the
//! server last acknowledged.

use std::sync::Arc;
use taskpad_core::effect::Effect;
use taskpad_core::reducer::{Reducer, INLINE_EFFECTS};
use taskpad_core::SmallVec;

use crate::api::TodoApi;
use crate::types::{Notification, TodoForm, TodoListAction, TodoListState};

type Effects = SmallVec<[Effect<TodoListAction>; INLINE_EFFECTS]>;

/// Injected dependencies for the todo list view.
#[derive(Clone)]
pub struct TodoListEnvironment {
    /// The API the view's effects run against.
    pub api: Arc<dyn TodoApi>,
}

impl TodoListEnvironment {
    #[must_use]
    pub fn new(api: Arc<dyn TodoApi>) -> Self {
        Self { api }
    }
}

/// Reducer for the todo list view.
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoListReducer;

impl TodoListReducer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn single(effect: Effect<TodoListAction>) -> Effects {
    let mut effects = SmallVec::new();
    effects.push(effect);
    effects
}

impl Reducer for TodoListReducer {
    type State = TodoListState;
    type Action = TodoListAction;
    type Environment = TodoListEnvironment;

    #[allow(clippy::too_many_lines)]
    fn reduce(
        &self,
        state: &mut TodoListState,
        action: TodoListAction,
        env: &TodoListEnvironment,
    ) -> Effects {
        match action {
            // ── Intents ────────────────────────────────────────────────
            TodoListAction::Load => {
                let api = Arc::clone(&env.api);
                single(Effect::future(async move {
                    Some(match api.fetch_todos().await {
                        Ok(todos) => TodoListAction::Loaded(todos),
                        Err(error) => TodoListAction::Failed(error.message().to_string()),
                    })
                }))
            }

            TodoListAction::OpenAddModal => {
                state.form.reset();
                state.show_add_modal = true;
                SmallVec::new()
            }
            TodoListAction::CloseAddModal => {
                state.show_add_modal = false;
                SmallVec::new()
            }

            TodoListAction::OpenEditModal(id) => {
                // Only todos we actually hold can be edited.
                if let Some(todo) = state.get(&id) {
                    state.form = TodoForm::from_todo(todo);
                    state.editing = Some(id);
                    state.show_edit_modal = true;
                }
                SmallVec::new()
            }
            TodoListAction::CloseEditModal => {
                state.show_edit_modal = false;
                state.editing = None;
                SmallVec::new()
            }

            TodoListAction::SetTitle(title) => {
                state.form.title = title;
                SmallVec::new()
            }
            TodoListAction::SetDescription(description) => {
                state.form.description = description;
                SmallVec::new()
            }
            TodoListAction::SetPriority(priority) => {
                state.form.priority = priority;
                SmallVec::new()
            }

            TodoListAction::SubmitAdd => {
                let api = Arc::clone(&env.api);
                let form = state.form.clone();
                single(Effect::future(async move {
                    Some(match api.add_todo(form).await {
                        Ok(todo) => TodoListAction::Added(todo),
                        Err(error) => TodoListAction::Failed(error.message().to_string()),
                    })
                }))
            }

            TodoListAction::SubmitEdit => {
                // Without an open edit target there is nothing to submit.
                let Some(id) = state.editing.clone() else {
                    return SmallVec::new();
                };
                let api = Arc::clone(&env.api);
                let form = state.form.clone();
                single(Effect::future(async move {
                    Some(match api.update_todo(id, form).await {
                        Ok(todo) => TodoListAction::Updated(todo),
                        Err(error) => TodoListAction::Failed(error.message().to_string()),
                    })
                }))
            }

            TodoListAction::Toggle(id) => {
                let api = Arc::clone(&env.api);
                single(Effect::future(async move {
                    Some(match api.toggle_todo(id).await {
                        Ok(todo) => TodoListAction::Toggled(todo),
                        Err(error) => TodoListAction::Failed(error.message().to_string()),
                    })
                }))
            }

            TodoListAction::Delete(id) => {
                let api = Arc::clone(&env.api);
                single(Effect::future(async move {
                    Some(match api.delete_todo(id.clone()).await {
                        Ok(()) => TodoListAction::Removed(id),
                        Err(error) => TodoListAction::Failed(error.message().to_string()),
                    })
                }))
            }

            TodoListAction::DismissNotification => {
                state.notification = None;
                SmallVec::new()
            }

            // ── Confirmations ──────────────────────────────────────────
            TodoListAction::Loaded(todos) => {
                state.todos = todos;
                SmallVec::new()
            }

            TodoListAction::Added(todo) => {
                state.todos.insert(0, todo);
                state.form.reset();
                state.show_add_modal = false;
                state.notification =
                    Some(Notification::Success("Todo added successfully!".to_string()));
                SmallVec::new()
            }

            TodoListAction::Updated(todo) => {
                replace(state, todo);
                state.show_edit_modal = false;
                state.editing = None;
                state.notification = Some(Notification::Success(
                    "Todo updated successfully!".to_string(),
                ));
                SmallVec::new()
            }

            TodoListAction::Toggled(todo) => {
                replace(state, todo);
                state.notification = Some(Notification::Success(
                    "Status toggled successfully!".to_string(),
                ));
                SmallVec::new()
            }

            TodoListAction::Removed(id) => {
                state.todos.retain(|todo| todo.id != id);
                state.notification = Some(Notification::Success(
                    "Todo deleted successfully!".to_string(),
                ));
                SmallVec::new()
            }

            TodoListAction::Failed(msg) => {
                state.notification = Some(Notification::Error(msg));
                SmallVec::new()
            }
        }
    }
}

/// Swap the server's version of a todo into the list, matching by id.
fn replace(state: &mut TodoListState, todo: taskpad_core::todo::Todo) {
    if let Some(slot) = state.todos.iter_mut().find(|t| t.id == todo.id) {
        *slot = todo;
    }
}

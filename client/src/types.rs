//! View state and actions for the todo list.

use serde::Serialize;
use taskpad_core::todo::{Priority, Todo, TodoId};

/// The add/edit form.
///
/// Doubles as the request body for create and update: the server treats all
/// three fields as present, so submitting the form replaces them wholesale.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TodoForm {
    /// Title field; the server rejects a blank one.
    pub title: String,
    /// Description field; empty means "no description".
    pub description: String,
    /// Selected priority.
    pub priority: Priority,
}

impl TodoForm {
    /// Pre-fill the form from an existing record, for editing.
    #[must_use]
    pub fn from_todo(todo: &Todo) -> Self {
        Self {
            title: todo.title.clone(),
            description: todo.description.clone().unwrap_or_default(),
            priority: todo.priority,
        }
    }

    /// Reset to an empty form with the default priority.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Transient user-facing message, shown until dismissed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notification {
    /// An operation the server confirmed.
    Success(String),
    /// An operation that failed; carries the message to show.
    Error(String),
}

impl Notification {
    /// The text to display.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Success(msg) | Self::Error(msg) => msg,
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Complete state of the todo list view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TodoListState {
    /// Todos as last confirmed by the server, newest first.
    pub todos: Vec<Todo>,
    /// The add/edit form contents.
    pub form: TodoForm,
    /// Id of the todo being edited, when the edit modal is open.
    pub editing: Option<TodoId>,
    /// Whether the add modal is open.
    pub show_add_modal: bool,
    /// Whether the edit modal is open.
    pub show_edit_modal: bool,
    /// Message awaiting display, if any.
    pub notification: Option<Notification>,
}

impl TodoListState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a todo by id.
    #[must_use]
    pub fn get(&self, id: &TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| &todo.id == id)
    }

    /// Number of todos still pending.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.todos
            .iter()
            .filter(|todo| todo.status == taskpad_core::todo::Status::Pending)
            .count()
    }
}

/// Everything that can happen to the todo list view.
///
/// Intents come from the user and produce effects; confirmations come back
/// from those effects carrying the server's answer. The list itself only
/// changes on confirmations.
#[derive(Debug)]
pub enum TodoListAction {
    // User intents
    /// Fetch the list from the server.
    Load,
    /// Open the add modal with a fresh form.
    OpenAddModal,
    /// Close the add modal, keeping the form as-is.
    CloseAddModal,
    /// Open the edit modal pre-filled from the given todo.
    OpenEditModal(TodoId),
    /// Close the edit modal and drop the edit target.
    CloseEditModal,
    /// Edit the form title.
    SetTitle(String),
    /// Edit the form description.
    SetDescription(String),
    /// Edit the form priority.
    SetPriority(Priority),
    /// Submit the add form.
    SubmitAdd,
    /// Submit the edit form for the todo currently being edited.
    SubmitEdit,
    /// Flip a todo between pending and done.
    Toggle(TodoId),
    /// Delete a todo.
    Delete(TodoId),
    /// Clear the current notification.
    DismissNotification,

    // Server confirmations
    /// The server returned the full list.
    Loaded(Vec<Todo>),
    /// The server created this record.
    Added(Todo),
    /// The server applied an edit; carries the post-update record.
    Updated(Todo),
    /// The server flipped the status; carries the post-toggle record.
    Toggled(Todo),
    /// The server deleted the record with this id.
    Removed(TodoId),
    /// Any operation failed; carries the message to surface.
    Failed(String),
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn default_form_is_empty_with_medium_priority() {
        let form = TodoForm::default();
        assert!(form.title.is_empty());
        assert!(form.description.is_empty());
        assert_eq!(form.priority, Priority::Medium);
    }

    #[test]
    fn form_serializes_all_three_fields() {
        let form = TodoForm {
            title: "Buy milk".to_string(),
            description: String::new(),
            priority: Priority::High,
        };
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "Buy milk",
                "description": "",
                "priority": "high",
            })
        );
    }

    #[test]
    fn state_lookups_cover_id_and_pending_count() {
        let pending = Todo {
            id: TodoId::new(),
            owner: None,
            title: "pending".to_string(),
            description: None,
            status: taskpad_core::todo::Status::Pending,
            priority: Priority::Medium,
            created_at: chrono::Utc::now(),
        };
        let mut done = pending.clone();
        done.id = TodoId::new();
        done.status = taskpad_core::todo::Status::Done;

        let state = TodoListState {
            todos: vec![pending.clone(), done],
            ..TodoListState::default()
        };

        assert_eq!(state.get(&pending.id).map(|t| t.title.as_str()), Some("pending"));
        assert!(state.get(&TodoId::new()).is_none());
        assert_eq!(state.pending_count(), 1);
    }

    #[test]
    fn notification_exposes_message_and_kind() {
        let success = Notification::Success("Todo added successfully!".to_string());
        assert_eq!(success.message(), "Todo added successfully!");
        assert!(!success.is_error());

        let error = Notification::Error("Failed to add todo".to_string());
        assert!(error.is_error());
    }
}

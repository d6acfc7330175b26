//! Todo CRUD handlers.
//!
//! Each handler is a single round trip: translate the request into one store
//! operation, map the result to JSON. The API layer holds no state between
//! requests; existence checks live inside the store's conditional
//! operations, so there is no lookup-then-mutate window here.

use crate::error::{ApiError, MessageBody};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use taskpad_core::todo::{NewTodo, Priority, Todo, TodoId, TodoPatch};
use uuid::Uuid;

/// Body of `POST /api/todos`.
///
/// `title` is optional at the type level so a missing title surfaces as a
/// field-level validation error rather than a deserialization rejection.
/// Any caller-supplied `status` is an unknown field and is ignored: created
/// todos always start pending.
#[derive(Debug, Deserialize)]
pub struct CreateTodoBody {
    /// Required, non-empty.
    #[serde(default)]
    pub title: Option<String>,
    /// Optional free-form description; stored as sent, including empty.
    #[serde(default)]
    pub description: Option<String>,
    /// Defaults to medium when unset.
    #[serde(default)]
    pub priority: Option<Priority>,
    /// Opaque owner reference; stored, never validated.
    #[serde(default)]
    pub user: Option<String>,
}

impl From<CreateTodoBody> for NewTodo {
    fn from(body: CreateTodoBody) -> Self {
        Self {
            owner: body.user,
            title: body.title.unwrap_or_default(),
            description: body.description,
            priority: body.priority,
        }
    }
}

/// `GET /api/todos` - all todos, newest first.
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state.todos.list().await?;
    Ok(Json(todos))
}

/// `POST /api/todos` - create a todo.
///
/// Returns 400 with a field-level error list when the title is missing or
/// blank. The created record is always pending, whatever the caller sent.
pub async fn create_todo(
    State(state): State<AppState>,
    Json(body): Json<CreateTodoBody>,
) -> Result<Json<Todo>, ApiError> {
    let todo = state.todos.insert(body.into()).await?;
    tracing::debug!(id = %todo.id, "Todo created");
    Ok(Json(todo))
}

/// `PUT /api/todos/:id` - partial update.
///
/// Exactly the fields present in the body are applied; absent fields keep
/// their prior values. A present-but-blank title is rejected, since a title
/// may never become empty.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<TodoPatch>,
) -> Result<Json<Todo>, ApiError> {
    let todo = state.todos.update(TodoId::from_uuid(id), patch).await?;
    Ok(Json(todo))
}

/// `PUT /api/todos/:id/toggle` - flip status.
///
/// Pending becomes done; anything else becomes pending.
pub async fn toggle_todo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Todo>, ApiError> {
    let todo = state.todos.toggle(TodoId::from_uuid(id)).await?;
    Ok(Json(todo))
}

/// `DELETE /api/todos/:id` - hard delete.
///
/// Confirms removal with a message rather than echoing the deleted record.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageBody>, ApiError> {
    state.todos.remove(TodoId::from_uuid(id)).await?;
    Ok(Json(MessageBody::new("Todo removed")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_body_maps_user_to_owner() {
        let body = CreateTodoBody {
            title: Some("Buy milk".to_string()),
            description: None,
            priority: None,
            user: Some("abc123".to_string()),
        };
        let input = NewTodo::from(body);
        assert_eq!(input.owner, Some("abc123".to_string()));
        assert_eq!(input.title, "Buy milk");
    }

    #[test]
    fn missing_title_becomes_empty_string_for_validation() {
        let body = CreateTodoBody {
            title: None,
            description: None,
            priority: None,
            user: None,
        };
        let input = NewTodo::from(body);
        assert!(input.validate().is_err());
    }
}

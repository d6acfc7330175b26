//! The Todo record and its input types.
//!
//! A todo is the sole entity in the system. The wire shape follows the HTTP
//! contract: `{_id, user?, title, description?, status, priority, date}`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a todo record, assigned by the store on insert.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Creates a new random `TodoId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a `TodoId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TodoId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Completion status of a todo.
///
/// Only these two values are ever persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Not yet done. Every todo starts here regardless of caller input.
    #[default]
    Pending,
    /// Completed.
    Done,
}

impl Status {
    /// The toggle rule: `Pending` becomes `Done`; anything that is not
    /// exactly `Pending` becomes `Pending`.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Pending => Self::Done,
            _ => Self::Pending,
        }
    }
}

/// Priority of a todo.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low priority.
    Low,
    /// Medium priority - the default when the caller supplies none.
    #[default]
    Medium,
    /// High priority.
    High,
}

/// A todo record as held by the store and returned over the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// Store-assigned identifier; immutable after creation.
    #[serde(rename = "_id")]
    pub id: TodoId,
    /// Opaque reference to the owning user. Stored as-is; never validated
    /// against the auth component.
    #[serde(rename = "user", default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Title; never empty once created.
    pub title: String,
    /// Optional free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Completion status.
    #[serde(default)]
    pub status: Status,
    /// Priority.
    #[serde(default)]
    pub priority: Priority,
    /// Creation time, assigned by the store; immutable after creation.
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
}

/// A field-level validation failure, as returned in 400 responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// The offending field name.
    pub field: String,
    /// Human-readable message.
    pub msg: String,
}

impl FieldError {
    /// Creates a field error.
    #[must_use]
    pub fn new(field: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            msg: msg.into(),
        }
    }

    /// The error reported for a missing or empty title.
    #[must_use]
    pub fn title_required() -> Self {
        Self::new("title", "Title is required")
    }
}

/// Input for creating a todo.
///
/// Status is deliberately absent: a freshly created todo is always
/// `Pending`, whatever the caller sends.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct NewTodo {
    /// Opaque owner reference.
    pub owner: Option<String>,
    /// Title; required and non-empty.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Priority; `Medium` when unset.
    pub priority: Option<Priority>,
}

impl NewTodo {
    /// Creates input with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            owner: None,
            title: title.into(),
            description: None,
            priority: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the owner reference.
    #[must_use]
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Validates the input, returning field-level errors on failure.
    ///
    /// # Errors
    ///
    /// Returns the list of failing fields; currently only the title can
    /// fail (missing or blank).
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        if self.title.trim().is_empty() {
            return Err(vec![FieldError::title_required()]);
        }
        Ok(())
    }
}

/// A partial update: only fields present in the request are applied.
///
/// Presence is what counts, not truthiness - an explicitly supplied empty
/// description clears the field. The one exception is `title`, which may
/// never become empty; [`TodoPatch::validate`] rejects that.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct TodoPatch {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement priority.
    pub priority: Option<Priority>,
    /// Replacement status.
    pub status: Option<Status>,
}

impl TodoPatch {
    /// A patch setting only the status.
    #[must_use]
    pub const fn status(status: Status) -> Self {
        Self {
            title: None,
            description: None,
            priority: None,
            status: Some(status),
        }
    }

    /// Whether no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.status.is_none()
    }

    /// Validates the patch.
    ///
    /// # Errors
    ///
    /// Returns a field error if a present title is blank: the title of an
    /// existing record must stay non-empty.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(vec![FieldError::title_required()]);
            }
        }
        Ok(())
    }

    /// Merges the patch into a record, leaving unset fields untouched.
    pub fn apply_to(&self, todo: &mut Todo) {
        if let Some(title) = &self.title {
            todo.title = title.clone();
        }
        if let Some(description) = &self.description {
            todo.description = Some(description.clone());
        }
        if let Some(priority) = self.priority {
            todo.priority = priority;
        }
        if let Some(status) = self.status {
            todo.status = status;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample(title: &str) -> Todo {
        Todo {
            id: TodoId::new(),
            owner: None,
            title: title.to_string(),
            description: None,
            status: Status::Pending,
            priority: Priority::Medium,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn toggle_is_asymmetric() {
        assert_eq!(Status::Pending.toggled(), Status::Done);
        assert_eq!(Status::Done.toggled(), Status::Pending);
        // toggling twice from pending lands back on pending
        assert_eq!(Status::Pending.toggled().toggled(), Status::Pending);
    }

    #[test]
    fn defaults_match_schema() {
        assert_eq!(Status::default(), Status::Pending);
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn new_todo_rejects_blank_title() {
        let errors = NewTodo::new("   ").validate().unwrap_err();
        assert_eq!(errors, vec![FieldError::title_required()]);
        assert!(NewTodo::new("Buy milk").validate().is_ok());
    }

    #[test]
    fn patch_applies_only_present_fields() {
        let mut todo = sample("Buy milk");
        let patch = TodoPatch {
            priority: Some(Priority::High),
            ..TodoPatch::default()
        };
        patch.apply_to(&mut todo);

        assert_eq!(todo.title, "Buy milk");
        assert_eq!(todo.priority, Priority::High);
        assert_eq!(todo.status, Status::Pending);
        assert_eq!(todo.description, None);
    }

    #[test]
    fn patch_clears_description_when_present_and_empty() {
        let mut todo = sample("Buy milk");
        todo.description = Some("2 liters".to_string());

        let patch = TodoPatch {
            description: Some(String::new()),
            ..TodoPatch::default()
        };
        patch.apply_to(&mut todo);

        assert_eq!(todo.description, Some(String::new()));
    }

    #[test]
    fn patch_rejects_blank_title() {
        let patch = TodoPatch {
            title: Some("  ".to_string()),
            ..TodoPatch::default()
        };
        assert!(patch.validate().is_err());
        assert!(TodoPatch::default().validate().is_ok());
        assert!(TodoPatch::default().is_empty());
    }

    #[test]
    fn wire_shape_uses_document_field_names() {
        let todo = sample("Buy milk");
        let json = serde_json::to_value(&todo).unwrap();

        assert!(json.get("_id").is_some());
        assert!(json.get("date").is_some());
        assert_eq!(json.get("status").unwrap(), "pending");
        assert_eq!(json.get("priority").unwrap(), "medium");
        // absent optionals are omitted entirely
        assert!(json.get("user").is_none());
        assert!(json.get("description").is_none());
    }

    #[test]
    fn status_round_trips_lowercase() {
        assert_eq!(serde_json::to_value(Status::Done).unwrap(), "done");
        let parsed: Status = serde_json::from_value("pending".into()).unwrap();
        assert_eq!(parsed, Status::Pending);
    }
}

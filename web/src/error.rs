//! Error types for web handlers.
//!
//! This module bridges store errors and HTTP responses via Axum's
//! `IntoResponse`. The wire bodies preserve the API contract: validation
//! failures carry a field-level error list, missing records a `msg`, and
//! unexpected failures a generic `msg` with the cause logged server-side
//! only.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;
use taskpad_core::store::StoreError;
use taskpad_core::todo::FieldError;

/// Application error type for web handlers.
///
/// # Examples
///
/// ```ignore
/// async fn handler(State(state): State<AppState>) -> Result<Json<Todo>, ApiError> {
///     let todo = state.todos.find(id).await?;
///     Ok(Json(todo))
/// }
/// ```
#[derive(Debug)]
pub enum ApiError {
    /// 400: one or more fields failed validation.
    Validation(Vec<FieldError>),
    /// 404: the id names no record.
    NotFound,
    /// 500: unexpected failure. The source is logged, never echoed.
    Internal(anyhow::Error),
}

impl ApiError {
    /// Create a validation error from field errors.
    #[must_use]
    pub const fn validation(errors: Vec<FieldError>) -> Self {
        Self::Validation(errors)
    }

    /// Create a not-found error.
    #[must_use]
    pub const fn not_found() -> Self {
        Self::NotFound
    }

    /// Create an internal error wrapping its cause.
    #[must_use]
    pub fn internal(source: impl Into<anyhow::Error>) -> Self {
        Self::Internal(source.into())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(errors) => write!(f, "validation failed ({} fields)", errors.len()),
            Self::NotFound => write!(f, "todo not found"),
            Self::Internal(source) => write!(f, "internal error: {source}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(errors) => Self::Validation(errors),
            StoreError::NotFound(_) => Self::NotFound,
            StoreError::Backend(detail) => Self::Internal(anyhow::anyhow!(detail)),
        }
    }
}

/// Body for message-carrying responses (`404`, `500`, delete confirmation).
#[derive(Debug, Serialize)]
pub struct MessageBody {
    /// Human-readable message.
    pub msg: String,
}

impl MessageBody {
    /// Creates a message body.
    #[must_use]
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// Body for validation failures: a field-level error list.
#[derive(Debug, Serialize)]
struct ValidationBody {
    errors: Vec<FieldError>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(ValidationBody { errors })).into_response()
            }
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                Json(MessageBody::new("Todo not found")),
            )
                .into_response(),
            Self::Internal(source) => {
                tracing::error!(error = %source, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MessageBody::new("Server error")),
                )
                    .into_response()
            }
        }
    }
}

//! HTTP access to the todo API.
//!
//! The view never talks to the network directly: it goes through the
//! [`TodoApi`] trait, and [`HttpTodoApi`] is the production implementation
//! over `reqwest`. Tests substitute their own implementations.
//!
//! Failures collapse to a single user-facing message: the server's `msg`
//! field when the response carries one, otherwise a per-operation fallback.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use taskpad_core::todo::{Todo, TodoId};
use thiserror::Error;

use crate::session::Session;
use crate::types::TodoForm;

/// Header carrying the session token on every request.
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// User-facing API failure.
///
/// Carries exactly the message the view should surface; transport and
/// decoding details are logged, not propagated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{msg}")]
pub struct ApiError {
    msg: String,
}

impl ApiError {
    /// Build an error from a user-facing message.
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }

    /// The message to surface to the user.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }
}

/// Boxed future returned by [`TodoApi`] operations.
pub type ApiFuture<T> = Pin<Box<dyn Future<Output = Result<T, ApiError>> + Send>>;

/// The five operations the view performs against the todo API.
///
/// Methods return owned futures so effects can outlive the borrow of the
/// environment that produced them.
pub trait TodoApi: Send + Sync {
    /// Fetch every todo, newest first.
    fn fetch_todos(&self) -> ApiFuture<Vec<Todo>>;

    /// Create a todo from the form; the server decides id, date and status.
    fn add_todo(&self, form: TodoForm) -> ApiFuture<Todo>;

    /// Replace the editable fields of an existing todo.
    fn update_todo(&self, id: TodoId, form: TodoForm) -> ApiFuture<Todo>;

    /// Flip a todo between pending and done.
    fn toggle_todo(&self, id: TodoId) -> ApiFuture<Todo>;

    /// Delete a todo.
    fn delete_todo(&self, id: TodoId) -> ApiFuture<()>;
}

/// [`TodoApi`] implementation over HTTP.
///
/// Cheap to clone; the underlying `reqwest::Client` pools connections.
#[derive(Clone, Debug)]
pub struct HttpTodoApi {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpTodoApi {
    /// Create a client for an API rooted at `base_url` (no trailing slash).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token: None,
        }
    }

    /// Attach a session whose token rides along on every request.
    #[must_use]
    pub fn with_session(mut self, session: &Session) -> Self {
        self.token = Some(session.token.clone());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/todos{path}", self.base_url)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self.http.request(method, self.url(path));
        if let Some(token) = &self.token {
            builder = builder.header(AUTH_TOKEN_HEADER, token);
        }
        builder
    }
}

/// Send a request and decode the response, reducing any failure to the
/// server's `msg` or the given fallback.
async fn run<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
    fallback: &'static str,
) -> Result<T, ApiError> {
    let response = request.send().await.map_err(|error| {
        tracing::warn!(%error, "Request failed to send");
        ApiError::new(fallback)
    })?;

    let status = response.status();
    if status.is_success() {
        response.json().await.map_err(|error| {
            tracing::warn!(%error, "Response body could not be decoded");
            ApiError::new(fallback)
        })
    } else {
        let msg = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|body| body.get("msg").and_then(Value::as_str).map(str::to_owned));
        tracing::debug!(%status, "Request rejected");
        Err(ApiError::new(msg.unwrap_or_else(|| fallback.to_string())))
    }
}

impl TodoApi for HttpTodoApi {
    fn fetch_todos(&self) -> ApiFuture<Vec<Todo>> {
        let request = self.request(reqwest::Method::GET, "");
        Box::pin(run(request, "Failed to fetch todos"))
    }

    fn add_todo(&self, form: TodoForm) -> ApiFuture<Todo> {
        let request = self.request(reqwest::Method::POST, "").json(&form);
        Box::pin(run(request, "Failed to add todo"))
    }

    fn update_todo(&self, id: TodoId, form: TodoForm) -> ApiFuture<Todo> {
        let request = self
            .request(reqwest::Method::PUT, &format!("/{id}"))
            .json(&form);
        Box::pin(run(request, "Failed to update todo"))
    }

    fn toggle_todo(&self, id: TodoId) -> ApiFuture<Todo> {
        let request = self.request(reqwest::Method::PUT, &format!("/{id}/toggle"));
        Box::pin(run(request, "Failed to toggle todo status"))
    }

    fn delete_todo(&self, id: TodoId) -> ApiFuture<()> {
        let request = self.request(reqwest::Method::DELETE, &format!("/{id}"));
        Box::pin(async move {
            // The server answers with `{"msg": "..."}`; only success matters here.
            run::<Value>(request, "Failed to delete todo").await?;
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn urls_are_rooted_under_the_api_prefix() {
        let api = HttpTodoApi::new("http://localhost:8080");
        assert_eq!(api.url(""), "http://localhost:8080/api/todos");
        assert_eq!(api.url("/abc/toggle"), "http://localhost:8080/api/todos/abc/toggle");
    }

    #[test]
    fn with_session_captures_the_token() {
        let session = Session::new("tok-123", serde_json::json!({"name": "Ada"}));
        let api = HttpTodoApi::new("http://localhost:8080").with_session(&session);
        assert_eq!(api.token.as_deref(), Some("tok-123"));
    }

    #[test]
    fn api_error_displays_its_message() {
        let error = ApiError::new("Failed to fetch todos");
        assert_eq!(error.to_string(), "Failed to fetch todos");
        assert_eq!(error.message(), "Failed to fetch todos");
    }
}

//! Axum HTTP API for the Taskpad task tracker.
//!
//! This crate is the imperative shell over `taskpad-core`:
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         Imperative Shell (Axum)         │  ← HTTP, JSON, CORS
//! │  - Request parsing                      │  ← Request ids, trace spans
//! │  - Response serialization               │
//! ├─────────────────────────────────────────┤
//! │         Document Store (core)           │
//! │  - Field validation                     │
//! │  - Atomic conditional operations        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Request Flow
//!
//! 1. **HTTP request** arrives at an Axum handler
//! 2. **Extract** id and JSON body
//! 3. **Translate** the body into a store operation
//! 4. **Map** the store result (or error) to an HTTP response
//!
//! # Endpoints
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | GET | `/api/todos` | array of todos, newest first |
//! | POST | `/api/todos` | created todo |
//! | PUT | `/api/todos/:id` | updated todo |
//! | PUT | `/api/todos/:id/toggle` | updated todo |
//! | DELETE | `/api/todos/:id` | `{"msg": "Todo removed"}` |
//! | GET | `/health` | `ok` |

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

// Re-export key types for convenience
pub use config::ServerConfig;
pub use error::ApiError;
pub use router::app;
pub use state::AppState;

/// Result type alias for web handlers.
pub type ApiResult<T> = Result<T, ApiError>;

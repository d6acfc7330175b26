//! Router assembly.
//!
//! Composes the todo handlers, health check, and ambient layers (trace,
//! CORS, request ids) into the application router.

use crate::config::ServerConfig;
use crate::handlers::{health, todos};
use crate::state::AppState;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

/// Auth token header the client attaches; accepted but not interpreted here.
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Router for the todo resource, nested under `/api/todos`.
///
/// | Method | Path | Handler |
/// |---|---|---|
/// | GET | `/` | list |
/// | POST | `/` | create |
/// | PUT | `/:id` | update |
/// | PUT | `/:id/toggle` | toggle |
/// | DELETE | `/:id` | delete |
pub fn todos_router() -> Router<AppState> {
    Router::new()
        .route("/", get(todos::list_todos).post(todos::create_todo))
        .route("/:id", put(todos::update_todo).delete(todos::delete_todo))
        .route("/:id/toggle", put(todos::toggle_todo))
}

/// Build the application router with all layers applied.
///
/// Request ids are assigned (or propagated) on the `x-request-id` header;
/// every request runs inside a trace span; CORS allows the configured
/// origins with credentials.
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/todos", todos_router())
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(config))
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .with_state(state)
}

/// CORS layer: configured origins, the four CRUD methods, JSON plus the
/// auth token header, credentials on.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::HeaderName::from_static(AUTH_TOKEN_HEADER),
        ])
        .allow_credentials(true)
}

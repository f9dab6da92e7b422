//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /login`   - Authenticate and establish a session (public)
//! - `POST /logout`  - Destroy the session (public)
//! - `GET  /health`  - Health check: DB connectivity (public)
//! - `GET  /me`      - Current user (session required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Sessions** - Signed session cookie, server-side store
//! - **Authentication** - Session check on protected routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{session_auth, tracing};
use crate::state::AppState;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_sessions::{SessionManagerLayer, SessionStore, service::SignedCookie};

/// Constructs the application router with all routes and middleware.
///
/// Generic over the session store so integration tests can run against an
/// in-memory store while production uses the PostgreSQL-backed one.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `session_layer` - configured session middleware (store, signing key,
///   expiry); built in [`crate::server`]
pub fn app_router<Store>(
    state: AppState,
    session_layer: SessionManagerLayer<Store, SignedCookie>,
) -> NormalizePath<Router>
where
    Store: SessionStore + Clone,
{
    let protected =
        api::routes::protected_routes().route_layer(middleware::from_fn(session_auth::layer));

    let router = Router::new()
        .merge(api::routes::public_routes())
        .merge(protected)
        .layer(session_layer)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

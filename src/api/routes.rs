//! API route configuration.

use crate::api::handlers::{health_handler, login_handler, logout_handler, me_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes that require no authentication.
///
/// # Endpoints
///
/// - `GET  /health` - Service health check
/// - `POST /login`  - Authenticate and establish a session
/// - `POST /logout` - Destroy the session (idempotent, works unauthenticated)
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/login", post(login_handler))
        .route("/logout", post(logout_handler))
}

/// Routes that require an authenticated session
/// (see [`crate::api::middleware::session_auth`]).
///
/// # Endpoints
///
/// - `GET /me` - Current user's account
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/me", get(me_handler))
}

//! Handler for the login endpoint.

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tower_sessions::Session;

use crate::api::dto::login::LoginRequest;
use crate::error::AppError;
use crate::session::SESSION_USER_ID_KEY;
use crate::state::AppState;

/// Authenticates a username/password pair and establishes a session.
///
/// # Endpoint
///
/// `POST /login` (form-encoded: `username`, `password`)
///
/// # Responses
///
/// | Condition             | Status | Body                      |
/// |-----------------------|--------|---------------------------|
/// | missing/blank field   | 400    | `Invalid input`           |
/// | unknown username      | 401    | `Invalid credentials`     |
/// | wrong password        | 401    | `Invalid credentials`     |
/// | success               | 200    | `Logged in successfully`  |
/// | infrastructure failure| 500    | `Internal server error`   |
///
/// Both fields are whitespace-trimmed before validation; blank input is
/// rejected before any database access. Unknown-username and wrong-password
/// share one response so the endpoint cannot be used to enumerate accounts.
///
/// On success the session id is rotated and `user_id` is written into the
/// server-side session, overwriting any previous value.
pub async fn login_handler(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginRequest>,
) -> Response {
    let username = form.username.trim();
    let password = form.password.trim();

    if username.is_empty() || password.is_empty() {
        return (StatusCode::BAD_REQUEST, "Invalid input").into_response();
    }

    let user = match state.auth_service.login(username, password).await {
        Ok(user) => user,
        Err(AppError::Unauthorized { .. }) => {
            return (StatusCode::UNAUTHORIZED, "Invalid credentials").into_response();
        }
        Err(e) => {
            tracing::error!("Login failed with infrastructure error: {e:?}");
            return internal_error();
        }
    };

    // Rotate the session id before granting authority, so a pre-login id
    // cannot be replayed as an authenticated one.
    if let Err(e) = session.cycle_id().await {
        tracing::error!("Failed to cycle session id: {e}");
        return internal_error();
    }

    if let Err(e) = session.insert(SESSION_USER_ID_KEY, user.id).await {
        tracing::error!("Failed to write user id to session: {e}");
        return internal_error();
    }

    tracing::info!(user_id = user.id, "User logged in");

    (StatusCode::OK, "Logged in successfully").into_response()
}

fn internal_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
}

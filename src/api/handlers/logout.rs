//! Handler for the logout endpoint.

use axum::http::StatusCode;
use tower_sessions::Session;

use crate::error::AppError;

/// Destroys the caller's session.
///
/// # Endpoint
///
/// `POST /logout`
///
/// Deletes the session record from the store and clears the cookie.
/// Idempotent: logging out without a session is still a `200`.
pub async fn logout_handler(session: Session) -> Result<(StatusCode, &'static str), AppError> {
    session.flush().await?;

    Ok((StatusCode::OK, "Logged out"))
}

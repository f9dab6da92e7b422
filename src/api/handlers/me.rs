//! Handler for the current-user endpoint.

use axum::{Extension, Json, extract::State};
use serde_json::json;

use crate::api::dto::user::UserResponse;
use crate::api::middleware::session_auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the account of the currently authenticated user.
///
/// # Endpoint
///
/// `GET /me` (session required)
///
/// The session middleware resolves the caller's id; this handler looks the
/// record up so the response always reflects current database state.
///
/// # Errors
///
/// Returns `404` if the account referenced by the session no longer exists.
pub async fn me_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state
        .auth_service
        .get_user(user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found", json!({ "id": user_id })))?;

    Ok(Json(user.into()))
}

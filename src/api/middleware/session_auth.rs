//! Session-based authentication middleware.

use axum::{
    extract::Request,
    middleware::Next,
    response::Response,
};
use tower_sessions::Session;

use crate::error::AppError;
use crate::session::SESSION_USER_ID_KEY;

/// Identity of the authenticated caller, inserted into request extensions
/// for downstream handlers.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub i64);

/// Requires an authenticated session.
///
/// # Authentication Flow
///
/// 1. Read `user_id` from the caller's session
/// 2. If present, insert [`CurrentUser`] into request extensions and continue
/// 3. If absent, reject with `401 Unauthorized`
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::api::middleware::session_auth;
///
/// let protected = Router::new()
///     .route("/me", get(me_handler))
///     .route_layer(middleware::from_fn(session_auth::layer));
/// ```
///
/// # Errors
///
/// Returns `401 Unauthorized` if the session holds no `user_id`.
/// Returns `500` if the session store itself fails.
pub async fn layer(session: Session, mut req: Request, next: Next) -> Result<Response, AppError> {
    let user_id: Option<i64> = session.get(SESSION_USER_ID_KEY).await?;

    match user_id {
        Some(id) => {
            req.extensions_mut().insert(CurrentUser(id));
            Ok(next.run(req).await)
        }
        None => Err(AppError::unauthorized(
            "Unauthorized",
            serde_json::json!({"reason": "Login required"}),
        )),
    }
}

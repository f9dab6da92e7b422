//! Session keys shared between handlers and middleware.
//!
//! The session itself is managed by `tower-sessions`; the cookie carries only
//! a signed session id, and the payload lives server-side in the configured
//! store. After a successful login the authenticated user's id is stored
//! under [`SESSION_USER_ID_KEY`]; everything that needs the caller's identity
//! reads this key back from the [`tower_sessions::Session`].

/// Key under which the authenticated user's id is stored in the session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

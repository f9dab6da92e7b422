//! User account entity.

use chrono::{DateTime, Utc};

/// A user account with login credentials.
///
/// `password_hash` is an Argon2 PHC-format string produced by
/// [`crate::utils::password::hash_password`]; the plaintext password is never
/// stored and never recoverable from it.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    /// Unique login name. Matched exactly (case-sensitive) at login.
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

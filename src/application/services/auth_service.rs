//! Authentication service for credential verification.

use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password;
use serde_json::json;

/// Service for authenticating username/password pairs.
///
/// Passwords are verified against stored Argon2 hashes; the plaintext is never
/// persisted. Unknown usernames and wrong passwords produce the same error so
/// a caller cannot enumerate accounts.
pub struct AuthService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> AuthService<R> {
    /// Creates a new authentication service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Authenticates a username/password pair.
    ///
    /// Looks up the user by exact username match and verifies the password
    /// against the stored hash. Returns the matching [`User`] on success.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if:
    /// - No user with that username exists
    /// - The password does not match
    ///
    /// Returns [`AppError::Internal`] on database errors or a malformed
    /// stored hash.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, AppError> {
        let Some(user) = self.repository.find_by_username(username).await? else {
            return Err(Self::invalid_credentials());
        };

        if !password::verify_password(password, &user.password_hash)? {
            return Err(Self::invalid_credentials());
        }

        Ok(user)
    }

    /// Creates a new user account with a hashed password.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username is already taken.
    /// Returns [`AppError::Internal`] on hashing or database errors.
    pub async fn register(&self, username: &str, password: &str) -> Result<User, AppError> {
        let password_hash = password::hash_password(password)?;

        self.repository.create_user(username, &password_hash).await
    }

    /// Fetches a user by id, e.g. to resolve a session's `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_user(&self, id: i64) -> Result<Option<User>, AppError> {
        self.repository.find_by_id(id).await
    }

    /// The one error both failed-login paths share.
    fn invalid_credentials() -> AppError {
        AppError::unauthorized(
            "Unauthorized",
            json!({"reason": "Unknown username or wrong password"}),
        )
    }
}

//! Repository trait for user account storage.

use crate::domain::entities::User;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for user account lookup and management.
///
/// The login path only ever reads (`find_by_username`); account creation and
/// removal happen through the `admin` CLI, never through the HTTP surface.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by exact, case-sensitive username match.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Finds a user by its database ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Creates a new user account.
    ///
    /// # Arguments
    ///
    /// - `username` - unique login name
    /// - `password_hash` - Argon2 PHC-format hash of the password
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create_user(&self, username: &str, password_hash: &str) -> Result<User, AppError>;

    /// Lists all user accounts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_users(&self) -> Result<Vec<User>, AppError>;

    /// Deletes a user account.
    ///
    /// Existing sessions referencing the user are not touched; they expire
    /// through the session store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_user(&self, id: i64) -> Result<(), AppError>;
}

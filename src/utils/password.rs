//! Password hashing and verification (Argon2id).
//!
//! Hashes are stored as PHC-format strings (e.g.
//! `$argon2id$v=19$m=19456,t=2,p=1$...`), so the parameters and salt travel
//! with the hash and verification needs no extra configuration. The
//! comparison inside the verifier is constant-time; the plaintext is never
//! recoverable.

use argon2::{
    Argon2,
    password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
        rand_core::OsRng},
};
use serde_json::json;

use crate::error::AppError;

/// Hashes a password with Argon2id and a fresh random salt.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| {
            tracing::error!("Password hashing failed: {e}");
            AppError::internal("Password hashing failed", json!({}))
        })?;

    Ok(hash.to_string())
}

/// Verifies a password against a stored PHC-format hash.
///
/// Returns `Ok(false)` on a plain mismatch. A malformed stored hash is not a
/// failed login but corrupt data, and surfaces as [`AppError::Internal`].
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|e| {
        tracing::error!("Malformed stored password hash: {e}");
        AppError::internal("Malformed password hash", json!({}))
    })?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => {
            tracing::error!("Password verification failed: {e}");
            Err(AppError::internal("Password verification failed", json!({})))
        }
    }
}

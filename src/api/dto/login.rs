//! DTO for the login endpoint.

use serde::Deserialize;

/// Form-encoded login request.
///
/// Both fields default to the empty string so a missing field takes the same
/// `400 Invalid input` path as a blank one, instead of a deserialization
/// rejection.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

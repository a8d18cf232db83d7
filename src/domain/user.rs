//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Registered account.
///
/// `password` always holds the stored hash, never plaintext. Serializing a
/// `User` exposes it; callers that must hide it use [`User::redacted`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Generated on registration
    #[schema(example = "6f1c2a4e-8d2b-4b7e-9d63-0b5f0c6e7a11")]
    pub id: String,
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "a@x.com")]
    pub email: String,
    /// One-way hash of the password
    pub password: String,
}

impl User {
    /// Build a new user record with a fresh id around an already hashed password.
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username,
            email,
            password: password_hash,
        }
    }

    /// Copy of this user with the password field blanked.
    pub fn redacted(mut self) -> Self {
        self.password = String::new();
        self
    }
}

/// Registration payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterUser {
    #[validate(length(min = 1, message = "Username is required"))]
    #[schema(example = "alice")]
    pub username: String,
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "a@x.com")]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "pw")]
    pub password: String,
}

/// Login payload
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "pw")]
    pub password: String,
}

/// Authenticated principal established at login and carried by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
}

impl Identity {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

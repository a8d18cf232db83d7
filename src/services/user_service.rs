//! User directory - registration, lookups and credential checks.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::password::DUMMY_HASH;
use crate::domain::{Identity, Password, RegisterUser, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// User directory operations.
///
/// `register` is the only operation that writes.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new user. The returned record carries the password hash.
    async fn register(&self, candidate: RegisterUser) -> AppResult<User>;

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Resolve a username to its user id, failing with `UserNotFound`
    async fn id_for_username(&self, username: &str) -> AppResult<String>;

    /// Check a username/password pair, failing with `AuthenticationFailed`
    async fn verify_credentials(&self, username: &str, password: &str) -> AppResult<Identity>;
}

/// Concrete implementation of UserService over a user repository.
pub struct UserManager<R: UserRepository> {
    repo: Arc<R>,
}

impl<R: UserRepository> UserManager<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: UserRepository> UserService for UserManager<R> {
    async fn register(&self, candidate: RegisterUser) -> AppResult<User> {
        // Username is checked before email; the first conflict wins
        if self.find_by_username(&candidate.username).await?.is_some() {
            return Err(AppError::DuplicateUsername);
        }
        if self.find_by_email(&candidate.email).await?.is_some() {
            return Err(AppError::DuplicateEmail);
        }

        let password_hash = Password::new(&candidate.password)?.into_string();
        let user = User::new(candidate.username, candidate.email, password_hash);

        // The store re-checks both fields atomically with the write
        let stored = self.repo.insert(user).await?;
        tracing::info!(user_id = %stored.id, username = %stored.username, "User registered");
        Ok(stored)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.repo.find_by_username(username).await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.repo.find_by_email(email).await
    }

    async fn id_for_username(&self, username: &str) -> AppResult<String> {
        self.find_by_username(username)
            .await?
            .map(|user| user.id)
            .ok_or_else(|| AppError::UserNotFound(username.to_string()))
    }

    async fn verify_credentials(&self, username: &str, password: &str) -> AppResult<Identity> {
        let user = self.find_by_username(username).await?;

        // Verify against a dummy hash for unknown users so both failures cost the same
        let stored_hash = user
            .as_ref()
            .map(|u| u.password.clone())
            .unwrap_or_else(|| DUMMY_HASH.to_string());
        let password_valid = Password::from_hash(stored_hash).verify(password);

        match user {
            Some(user) if password_valid => {
                tracing::info!(username = %user.username, "Credentials verified");
                Ok(Identity::new(user.username))
            }
            _ => {
                tracing::debug!(username = %username, "Credential check failed");
                Err(AppError::AuthenticationFailed)
            }
        }
    }
}

//! User repository - persistence of user accounts.

use async_trait::async_trait;
use mongodb::{
    bson::Document,
    error::{ErrorKind, WriteFailure},
    Collection, Database,
};
use tracing::instrument;

use super::entities::UserDocument;
use crate::config::{DUPLICATE_KEY_ERROR_CODE, EMAIL_INDEX, USERNAME_INDEX, USERS_COLLECTION};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

/// User persistence contract.
///
/// `insert` is a conditional insert: implementations must reject a record
/// whose username or email is already taken, atomically with the write.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user, failing with `DuplicateUsername`/`DuplicateEmail`
    async fn insert(&self, user: User) -> AppResult<User>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
}

/// MongoDB-backed user repository
#[derive(Clone)]
pub struct UserStore {
    collection: Collection<UserDocument>,
}

impl UserStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<UserDocument>(USERS_COLLECTION),
        }
    }

    async fn find_one_by(&self, field: &str, value: &str) -> AppResult<Option<User>> {
        let mut filter = Document::new();
        filter.insert(field, value);

        let found = self.collection.find_one(filter).await?;
        Ok(found.map(User::from))
    }
}

/// Map a unique index violation to the registration conflict it represents.
fn duplicate_key_conflict(err: &mongodb::error::Error) -> Option<AppError> {
    let ErrorKind::Write(WriteFailure::WriteError(write_error)) = err.kind.as_ref() else {
        return None;
    };
    if write_error.code != DUPLICATE_KEY_ERROR_CODE {
        return None;
    }

    if write_error.message.contains(USERNAME_INDEX) {
        Some(AppError::DuplicateUsername)
    } else if write_error.message.contains(EMAIL_INDEX) {
        Some(AppError::DuplicateEmail)
    } else {
        None
    }
}

#[async_trait]
impl UserRepository for UserStore {
    #[instrument(skip(self, user), fields(username = %user.username))]
    async fn insert(&self, user: User) -> AppResult<User> {
        let document = UserDocument::from(user.clone());

        match self.collection.insert_one(&document).await {
            Ok(_) => {
                tracing::info!(user_id = %user.id, "User stored");
                Ok(user)
            }
            Err(err) => Err(duplicate_key_conflict(&err).unwrap_or(AppError::Database(err))),
        }
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        self.find_one_by("_id", id).await
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.find_one_by("username", username).await
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.find_one_by("email", email).await
    }
}

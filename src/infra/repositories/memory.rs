//! In-process repositories.
//!
//! Same contracts as the MongoDB stores. Used by the test suite and by
//! `serve --store memory`; contents are lost on restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{ItemRepository, UserRepository};
use crate::domain::{Item, User};
use crate::errors::{AppError, AppResult};

/// Memory-backed user repository
#[derive(Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserStore {
    async fn insert(&self, user: User) -> AppResult<User> {
        // Check and insert under one write lock
        let mut users = self.users.write().await;

        if users.values().any(|u| u.username == user.username) {
            return Err(AppError::DuplicateUsername);
        }
        if users.values().any(|u| u.email == user.email) {
            return Err(AppError::DuplicateEmail);
        }

        users.insert(user.id.clone(), user.clone());

        tracing::info!(user_id = %user.id, username = %user.username, "User stored");
        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }
}

/// Memory-backed item repository; keeps insertion order.
#[derive(Clone, Default)]
pub struct MemoryItemStore {
    items: Arc<RwLock<Vec<Item>>>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for MemoryItemStore {
    async fn insert(&self, item: Item) -> AppResult<Item> {
        self.items.write().await.push(item.clone());
        Ok(item)
    }

    async fn replace(&self, item: Item) -> AppResult<Item> {
        let mut items = self.items.write().await;

        let existing = items
            .iter_mut()
            .find(|i| i.id == item.id)
            .ok_or_else(|| AppError::ItemNotFound(item.id.clone()))?;
        *existing = item.clone();

        Ok(item)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|i| i.id == id).cloned())
    }

    async fn find_by_owner(&self, owner_id: &str) -> AppResult<Vec<Item>> {
        let items = self.items.read().await;
        Ok(items
            .iter()
            .filter(|i| i.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<bool> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|i| i.id != id);
        Ok(items.len() < before)
    }
}

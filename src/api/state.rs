//! Application state - Dependency injection container.

use std::sync::Arc;

use super::policy::AccessPolicy;
use crate::config::{Config, StoreBackend};
use crate::errors::AppResult;
use crate::infra::{Database, ItemStore, MemoryItemStore, MemoryUserStore, UserStore};
use crate::services::{AuthService, Authenticator, ItemManager, ItemService, UserManager, UserService};

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Session token service
    pub auth_service: Arc<dyn AuthService>,
    /// User directory
    pub user_service: Arc<dyn UserService>,
    /// Item store
    pub item_service: Arc<dyn ItemService>,
    /// Ownership and redaction rules
    pub policy: AccessPolicy,
    /// Database connection, absent for the memory backend
    pub database: Option<Arc<Database>>,
}

impl AppState {
    /// Build the state for the configured store backend.
    pub async fn from_config(config: Config) -> AppResult<Self> {
        match config.store_backend {
            StoreBackend::Mongo => {
                let database = Arc::new(Database::connect(&config).await?);
                Ok(Self::with_database(database, config))
            }
            StoreBackend::Memory => {
                tracing::warn!("Using in-memory store; data is lost on restart");
                Ok(Self::in_memory(config))
            }
        }
    }

    /// State backed by MongoDB repositories.
    pub fn with_database(database: Arc<Database>, config: Config) -> Self {
        let users = Arc::new(UserStore::new(database.database()));
        let items = Arc::new(ItemStore::new(database.database()));

        Self {
            auth_service: Arc::new(Authenticator::new(config.clone())),
            user_service: Arc::new(UserManager::new(users)),
            item_service: Arc::new(ItemManager::new(items)),
            policy: AccessPolicy::from_config(&config),
            database: Some(database),
        }
    }

    /// State backed by fresh memory repositories.
    pub fn in_memory(config: Config) -> Self {
        Self {
            auth_service: Arc::new(Authenticator::new(config.clone())),
            user_service: Arc::new(UserManager::new(Arc::new(MemoryUserStore::new()))),
            item_service: Arc::new(ItemManager::new(Arc::new(MemoryItemStore::new()))),
            policy: AccessPolicy::from_config(&config),
            database: None,
        }
    }

    /// State with manually injected services.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        user_service: Arc<dyn UserService>,
        item_service: Arc<dyn ItemService>,
        policy: AccessPolicy,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            item_service,
            policy,
            database: None,
        }
    }
}

//! Item service - todo item use cases.
//!
//! No ownership checks happen here; the API layer consults the access
//! policy before calling in.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Item, ItemInput};
use crate::errors::{AppError, AppResult};
use crate::infra::ItemRepository;

#[async_trait]
pub trait ItemService: Send + Sync {
    /// Create an item owned by `owner_id`
    async fn create(&self, input: ItemInput, owner_id: &str) -> AppResult<Item>;

    async fn get_by_id(&self, id: &str) -> AppResult<Option<Item>>;

    /// Items of one owner, in storage order
    async fn list_by_owner(&self, owner_id: &str) -> AppResult<Vec<Item>>;

    /// Replace the mutable fields of an existing item
    async fn update(&self, id: &str, input: ItemInput) -> AppResult<Item>;

    /// Delete by id; a missing id is not an error
    async fn delete_by_id(&self, id: &str) -> AppResult<()>;
}

/// Concrete implementation of ItemService over an item repository.
pub struct ItemManager<R: ItemRepository> {
    repo: Arc<R>,
}

impl<R: ItemRepository> ItemManager<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: ItemRepository> ItemService for ItemManager<R> {
    async fn create(&self, input: ItemInput, owner_id: &str) -> AppResult<Item> {
        let item = Item::new(input, owner_id.to_string());
        let stored = self.repo.insert(item).await?;

        tracing::info!(item_id = %stored.id, owner_id = %stored.owner_id, "Item created");
        Ok(stored)
    }

    async fn get_by_id(&self, id: &str) -> AppResult<Option<Item>> {
        self.repo.find_by_id(id).await
    }

    async fn list_by_owner(&self, owner_id: &str) -> AppResult<Vec<Item>> {
        self.repo.find_by_owner(owner_id).await
    }

    async fn update(&self, id: &str, input: ItemInput) -> AppResult<Item> {
        let mut item = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::ItemNotFound(id.to_string()))?;

        if let Some(requested) = input.owner_id.as_deref() {
            if requested != item.owner_id {
                tracing::debug!(item_id = %id, requested_owner = %requested, "Ignoring owner change on update");
            }
        }

        item.apply_update(input);
        // Fails with ItemNotFound if a delete landed since the lookup
        let stored = self.repo.replace(item).await?;

        tracing::info!(item_id = %stored.id, "Item updated");
        Ok(stored)
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<()> {
        if self.repo.delete_by_id(id).await? {
            tracing::info!(item_id = %id, "Item deleted");
        } else {
            tracing::warn!(item_id = %id, "Delete requested for unknown item");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockItemRepository;

    fn stored_item(title: &str, owner_id: &str) -> Item {
        Item::new(ItemInput::titled(title), owner_id.to_string())
    }

    #[tokio::test]
    async fn test_create_forces_owner_and_timestamps() {
        let mut repo = MockItemRepository::new();
        repo.expect_insert().times(1).returning(Ok);
        repo.expect_replace().never();

        let service = ItemManager::new(Arc::new(repo));
        let input = ItemInput {
            owner_id: Some("someone-else".to_string()),
            ..ItemInput::titled("Buy milk")
        };
        let item = service.create(input, "u1").await.unwrap();

        assert_eq!(item.owner_id, "u1");
        assert_eq!(item.title, "Buy milk");
        assert!(!item.completed);
        assert_eq!(item.created_at, item.updated_at);
        assert!(!item.id.is_empty());
    }

    #[tokio::test]
    async fn test_get_by_id_absent() {
        let mut repo = MockItemRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = ItemManager::new(Arc::new(repo));
        assert!(service.get_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_by_owner_passes_through() {
        let mut repo = MockItemRepository::new();
        repo.expect_find_by_owner()
            .returning(|_| Ok(vec![stored_item("a", "u1"), stored_item("b", "u1")]));

        let service = ItemManager::new(Arc::new(repo));
        let items = service.list_by_owner("u1").await.unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "a");
    }

    #[tokio::test]
    async fn test_update_keeps_owner_and_created_at() {
        let existing = stored_item("Buy milk", "u1");
        let created_at = existing.created_at;
        let id = existing.id.clone();

        let mut repo = MockItemRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_replace().times(1).returning(Ok);
        repo.expect_insert().never();

        let service = ItemManager::new(Arc::new(repo));
        let input = ItemInput {
            completed: true,
            owner_id: Some("u2".to_string()),
            ..ItemInput::titled("Buy oat milk")
        };
        let updated = service.update(&id, input).await.unwrap();

        assert_eq!(updated.id, id);
        assert_eq!(updated.owner_id, "u1");
        assert_eq!(updated.title, "Buy oat milk");
        assert!(updated.completed);
        assert_eq!(updated.created_at, created_at);
        assert!(updated.updated_at > updated.created_at);
    }

    #[tokio::test]
    async fn test_update_missing_item_fails() {
        let mut repo = MockItemRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_replace().never();

        let service = ItemManager::new(Arc::new(repo));
        let result = service.update("nonexistent", ItemInput::titled("x")).await;

        assert!(matches!(result, Err(AppError::ItemNotFound(id)) if id == "nonexistent"));
    }

    #[tokio::test]
    async fn test_update_racing_delete_fails() {
        let existing = stored_item("Buy milk", "u1");
        let id = existing.id.clone();

        // Lookup still sees the item, but it is gone by the time of the write
        let mut repo = MockItemRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_replace()
            .times(1)
            .returning(|item| Err(AppError::ItemNotFound(item.id)));
        repo.expect_insert().never();

        let service = ItemManager::new(Arc::new(repo));
        let result = service.update(&id, ItemInput::titled("x")).await;

        assert!(matches!(result, Err(AppError::ItemNotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn test_delete_tolerates_missing_item() {
        let mut repo = MockItemRepository::new();
        repo.expect_delete_by_id().times(1).returning(|_| Ok(false));

        let service = ItemManager::new(Arc::new(repo));
        assert!(service.delete_by_id("nonexistent").await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_propagates_store_errors() {
        let mut repo = MockItemRepository::new();
        repo.expect_delete_by_id()
            .returning(|_| Err(AppError::internal("store unavailable")));

        let service = ItemManager::new(Arc::new(repo));
        assert!(service.delete_by_id("item123").await.is_err());
    }
}

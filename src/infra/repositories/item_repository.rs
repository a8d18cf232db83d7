//! Item repository - persistence of todo items.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection, Database};
use tracing::instrument;

use super::entities::ItemDocument;
use crate::config::ITEMS_COLLECTION;
use crate::domain::Item;
use crate::errors::{AppError, AppResult};

/// Item persistence contract.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Store a new item
    async fn insert(&self, item: Item) -> AppResult<Item>;

    /// Replace the stored item with the same id, failing with `ItemNotFound`
    /// when it no longer exists
    async fn replace(&self, item: Item) -> AppResult<Item>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Item>>;

    /// Items of one owner in storage order
    async fn find_by_owner(&self, owner_id: &str) -> AppResult<Vec<Item>>;

    /// Returns whether a document was removed
    async fn delete_by_id(&self, id: &str) -> AppResult<bool>;
}

/// MongoDB-backed item repository
#[derive(Clone)]
pub struct ItemStore {
    collection: Collection<ItemDocument>,
}

impl ItemStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<ItemDocument>(ITEMS_COLLECTION),
        }
    }
}

#[async_trait]
impl ItemRepository for ItemStore {
    #[instrument(skip(self, item), fields(item_id = %item.id))]
    async fn insert(&self, item: Item) -> AppResult<Item> {
        self.collection
            .insert_one(ItemDocument::from(item.clone()))
            .await?;

        Ok(item)
    }

    #[instrument(skip(self, item), fields(item_id = %item.id))]
    async fn replace(&self, item: Item) -> AppResult<Item> {
        let document = ItemDocument::from(item.clone());

        // No upsert: a concurrent delete must not be undone
        let result = self
            .collection
            .replace_one(doc! { "_id": item.id.as_str() }, &document)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::ItemNotFound(item.id));
        }
        Ok(item)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Item>> {
        let found = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(found.map(Item::from))
    }

    #[instrument(skip(self))]
    async fn find_by_owner(&self, owner_id: &str) -> AppResult<Vec<Item>> {
        let cursor = self.collection.find(doc! { "owner_id": owner_id }).await?;
        let documents: Vec<ItemDocument> = cursor.try_collect().await?;

        Ok(documents.into_iter().map(Item::from).collect())
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: &str) -> AppResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}

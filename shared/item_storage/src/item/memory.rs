//! In-memory item store used as a test double

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Item, ItemStorageError, ItemStorageResult, ItemStore};

/// Item store kept in process memory
///
/// Every operation takes the lock once, so the conditional writes are atomic
/// in the same way as the `DynamoDB` condition expressions.
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    items: RwLock<BTreeMap<String, Item>>,
}

impl InMemoryItemStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with `items`
    #[must_use]
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        let items = items
            .into_iter()
            .map(|item| (item.item_id.clone(), item))
            .collect();

        Self {
            items: RwLock::new(items),
        }
    }

    /// Number of stored items
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    /// Whether the store holds no items
    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn get(&self, item_id: &str) -> ItemStorageResult<Option<Item>> {
        Ok(self.items.read().await.get(item_id).cloned())
    }

    async fn insert(&self, item: &Item) -> ItemStorageResult<()> {
        let mut items = self.items.write().await;
        if items.contains_key(&item.item_id) {
            return Err(ItemStorageError::ItemExists);
        }
        items.insert(item.item_id.clone(), item.clone());
        Ok(())
    }

    async fn replace(&self, item: &Item) -> ItemStorageResult<()> {
        let mut items = self.items.write().await;
        let Some(stored) = items.get_mut(&item.item_id) else {
            return Err(ItemStorageError::ItemNotFound);
        };
        *stored = item.clone();
        Ok(())
    }

    async fn delete(&self, item_id: &str) -> ItemStorageResult<()> {
        self.items
            .write()
            .await
            .remove(item_id)
            .map(|_| ())
            .ok_or(ItemStorageError::ItemNotFound)
    }

    async fn scan(&self) -> ItemStorageResult<Vec<Item>> {
        Ok(self.items.read().await.values().cloned().collect())
    }
}

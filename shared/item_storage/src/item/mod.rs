//! Catalog item storage module for `DynamoDB` operations

mod error;
#[cfg(any(test, feature = "test-utils"))]
mod memory;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use aws_sdk_dynamodb::{error::SdkError, types::AttributeValue, Client as DynamoDbClient};
use serde::{Deserialize, Serialize};
use serde_dynamo::{from_items, to_item};
use strum::{Display, EnumIter};

pub use error::{ItemStorageError, ItemStorageResult};
#[cfg(any(test, feature = "test-utils"))]
pub use memory::InMemoryItemStore;

/// Catalog item as persisted in the item table
///
/// Strings are stored as `S` attributes and the price as an `N` attribute,
/// i.e. the decimal string encoding of the number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Primary key - caller assigned identifier
    pub item_id: String,
    /// Display name
    pub item_name: String,
    /// Category the item is listed under
    pub item_category: String,
    /// Unit price
    pub item_price: f64,
}

/// `DynamoDB` attribute names for the item table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ItemAttribute {
    /// Primary key (hash key)
    ItemId,
    /// Item name
    ItemName,
    /// Item category
    ItemCategory,
    /// Item price
    ItemPrice,
}

/// Key-value store holding catalog items, keyed by `item_id`
///
/// Writes are conditional on the existence of the key so that a create or an
/// update is decided by the store in a single call rather than by a separate
/// lookup followed by a write.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Point lookup by `item_id`
    async fn get(&self, item_id: &str) -> ItemStorageResult<Option<Item>>;

    /// Stores a new item
    ///
    /// # Errors
    ///
    /// Returns `ItemStorageError::ItemExists` if the `item_id` is already taken
    async fn insert(&self, item: &Item) -> ItemStorageResult<()>;

    /// Replaces every attribute of an existing item
    ///
    /// # Errors
    ///
    /// Returns `ItemStorageError::ItemNotFound` if no item has this `item_id`
    async fn replace(&self, item: &Item) -> ItemStorageResult<()>;

    /// Removes an existing item
    ///
    /// # Errors
    ///
    /// Returns `ItemStorageError::ItemNotFound` if no item has this `item_id`
    async fn delete(&self, item_id: &str) -> ItemStorageResult<()>;

    /// Reads every stored item, in store defined order
    async fn scan(&self) -> ItemStorageResult<Vec<Item>>;
}

/// `DynamoDB` backed item store
pub struct DynamoDbItemStore {
    dynamodb_client: Arc<DynamoDbClient>,
    table_name: String,
}

impl DynamoDbItemStore {
    /// Creates a new storage instance
    ///
    /// # Arguments
    ///
    /// * `dynamodb_client` - Pre-configured `DynamoDB` client
    /// * `table_name` - `DynamoDB` table name for catalog items
    #[must_use]
    pub const fn new(dynamodb_client: Arc<DynamoDbClient>, table_name: String) -> Self {
        Self {
            dynamodb_client,
            table_name,
        }
    }

    /// Name of the table this store reads and writes
    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    fn key(item_id: &str) -> HashMap<String, AttributeValue> {
        HashMap::from([(
            ItemAttribute::ItemId.to_string(),
            AttributeValue::S(item_id.to_string()),
        )])
    }

    /// Puts the item guarded by `condition` on the hash key, mapping a failed
    /// condition to `on_conflict`
    async fn conditional_put(
        &self,
        item: &Item,
        condition: &str,
        on_conflict: ItemStorageError,
    ) -> ItemStorageResult<()> {
        let record = to_item(item)?;

        self.dynamodb_client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(record))
            .condition_expression(condition)
            .expression_attribute_names("#pk", ItemAttribute::ItemId.to_string())
            .send()
            .await
            .map_err(|err| {
                if matches!(
                    err,
                    SdkError::ServiceError(ref svc) if svc.err().is_conditional_check_failed_exception()
                ) {
                    on_conflict
                } else {
                    err.into()
                }
            })?;

        Ok(())
    }
}

#[async_trait]
impl ItemStore for DynamoDbItemStore {
    async fn get(&self, item_id: &str) -> ItemStorageResult<Option<Item>> {
        let response = self
            .dynamodb_client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(Self::key(item_id)))
            .send()
            .await?;

        response
            .item()
            .map(|item| {
                serde_dynamo::from_item(item.clone())
                    .map_err(|e| ItemStorageError::SerializationError(e.to_string()))
            })
            .transpose()
    }

    async fn insert(&self, item: &Item) -> ItemStorageResult<()> {
        self.conditional_put(
            item,
            "attribute_not_exists(#pk)",
            ItemStorageError::ItemExists,
        )
        .await
    }

    async fn replace(&self, item: &Item) -> ItemStorageResult<()> {
        self.conditional_put(item, "attribute_exists(#pk)", ItemStorageError::ItemNotFound)
            .await
    }

    async fn delete(&self, item_id: &str) -> ItemStorageResult<()> {
        self.dynamodb_client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(Self::key(item_id)))
            .condition_expression("attribute_exists(#pk)")
            .expression_attribute_names("#pk", ItemAttribute::ItemId.to_string())
            .send()
            .await
            .map_err(|err| {
                if matches!(
                    err,
                    SdkError::ServiceError(ref svc) if svc.err().is_conditional_check_failed_exception()
                ) {
                    ItemStorageError::ItemNotFound
                } else {
                    err.into()
                }
            })?;

        Ok(())
    }

    async fn scan(&self) -> ItemStorageResult<Vec<Item>> {
        let mut items = Vec::new();
        let mut start_key = None;

        loop {
            let response = self
                .dynamodb_client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key)
                .send()
                .await?;

            items.extend(from_items::<_, Item>(response.items.unwrap_or_default())?);

            match response.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        Ok(items)
    }
}

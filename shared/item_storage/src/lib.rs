//! Item storage for the catalog service
//!
//! This crate owns the persisted shape of a catalog item and the `ItemStore`
//! capability the request handlers are built on, with a `DynamoDB` backed
//! implementation and an in-memory one for tests.

pub mod item;

pub use item::{
    DynamoDbItemStore, Item, ItemAttribute, ItemStorageError, ItemStorageResult, ItemStore,
};

#[cfg(any(test, feature = "test-utils"))]
pub use item::InMemoryItemStore;

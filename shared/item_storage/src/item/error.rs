//! Error types for item storage operations

use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::{
    delete_item::DeleteItemError, get_item::GetItemError, put_item::PutItemError, scan::ScanError,
};
use thiserror::Error;

/// Result type alias for storage operations
pub type ItemStorageResult<T> = Result<T, ItemStorageError>;

/// Storage error types for item operations
#[derive(Debug, Error)]
pub enum ItemStorageError {
    /// Failed to get item from `DynamoDB`
    #[error("Failed to get item from DynamoDB: {}", summary(.0))]
    DynamoDbGetError(#[from] SdkError<GetItemError>),

    /// Failed to write item into `DynamoDB`
    #[error("Failed to write item into DynamoDB: {}", summary(.0))]
    DynamoDbPutError(#[from] SdkError<PutItemError>),

    /// Failed to delete item from `DynamoDB`
    #[error("Failed to delete item from DynamoDB: {}", summary(.0))]
    DynamoDbDeleteError(#[from] SdkError<DeleteItemError>),

    /// Failed to scan items from `DynamoDB`
    #[error("Failed to scan items from DynamoDB: {}", summary(.0))]
    DynamoDbScanError(#[from] SdkError<ScanError>),

    /// An item with the same `item_id` is already stored
    #[error("Item already exists")]
    ItemExists,

    /// No item is stored under the requested `item_id`
    #[error("Item not found")]
    ItemNotFound,

    /// Failed to convert an item to or from a `DynamoDB` record
    #[error("Failed to parse item: {0}")]
    SerializationError(String),
}

impl ItemStorageError {
    /// Full error chain, including the raw store response where there is one
    ///
    /// Meant for logs. The `Display` output only carries the store's error
    /// code and message.
    #[must_use]
    pub fn context(&self) -> String {
        DisplayErrorContext(self).to_string()
    }
}

/// Service errors are reduced to their code and message, other SDK failures
/// (timeouts, dispatch) to their short description
fn summary<E: std::error::Error>(err: &SdkError<E>) -> String {
    err.as_service_error()
        .map_or_else(|| err.to_string(), ToString::to_string)
}

impl From<serde_dynamo::Error> for ItemStorageError {
    fn from(err: serde_dynamo::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

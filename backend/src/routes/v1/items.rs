use std::sync::Arc;

use axum::{extract::Query, Extension};
use catalog::{CatalogService, MessageResponse, ReadOutcome};

use crate::types::{AppError, ItemBody, ItemQuery, JsonReply};

/// Create a catalog item
///
/// Stores a new item with a caller assigned `item_id`. All four fields are required.
///
/// # Returns
///
/// Returns `201 CREATED` with a confirmation message
///
/// # Errors
///
/// Returns an error if:
/// - `400 BAD_REQUEST` - The body is not valid JSON, misses fields, or the `item_id` already exists
/// - `500 INTERNAL_SERVER_ERROR` - Storage operation fails
pub async fn create_item(
    Extension(catalog): Extension<Arc<CatalogService>>,
    ItemBody(body): ItemBody,
) -> Result<JsonReply<MessageResponse>, AppError> {
    Ok(catalog.create(&body).await?.into())
}

/// Read one catalog item, or list all of them
///
/// With `item_id` the single item is returned, without it every stored item
/// is returned in store defined order.
///
/// # Returns
///
/// Returns `200 OK` with the item or the list of items
///
/// # Errors
///
/// Returns an error if:
/// - `404 NOT_FOUND` - No item with the given `item_id`
/// - `500 INTERNAL_SERVER_ERROR` - Storage operation fails
pub async fn read_items(
    Extension(catalog): Extension<Arc<CatalogService>>,
    Query(query): Query<ItemQuery>,
) -> Result<JsonReply<ReadOutcome>, AppError> {
    Ok(catalog.read(query.item_id.as_deref()).await?.into())
}

/// Replace a catalog item
///
/// Overwrites every field of an existing item. Partial updates are not supported.
///
/// # Returns
///
/// Returns `201 CREATED` with a confirmation message
///
/// # Errors
///
/// Returns an error if:
/// - `400 BAD_REQUEST` - The body is not valid JSON, misses fields, or no item has the `item_id`
/// - `500 INTERNAL_SERVER_ERROR` - Storage operation fails
pub async fn update_item(
    Extension(catalog): Extension<Arc<CatalogService>>,
    ItemBody(body): ItemBody,
) -> Result<JsonReply<MessageResponse>, AppError> {
    Ok(catalog.update(&body).await?.into())
}

/// Delete a catalog item
///
/// # Returns
///
/// Returns `200 OK` with a confirmation message
///
/// # Errors
///
/// Returns an error if:
/// - `400 BAD_REQUEST` - `item_id` is missing or no item has it
/// - `500 INTERNAL_SERVER_ERROR` - Storage operation fails
pub async fn delete_item(
    Extension(catalog): Extension<Arc<CatalogService>>,
    Query(query): Query<ItemQuery>,
) -> Result<JsonReply<MessageResponse>, AppError> {
    Ok(catalog.delete(query.item_id.as_deref()).await?.into())
}

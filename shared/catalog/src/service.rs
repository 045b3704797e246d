//! Catalog operations over an injected item store

use std::sync::Arc;

use item_storage::{ItemStorageError, ItemStore};

use crate::{
    error::{CatalogError, CatalogResult},
    payload::ItemPayload,
    response::{ItemView, MessageResponse, ReadOutcome, Reply},
};

/// Create, read, update and delete of catalog items
///
/// Each operation validates its input before touching the store and then makes
/// a single store call. Existence checks are carried by the store's conditional
/// writes, so concurrent requests on the same `item_id` cannot both create or
/// both delete it.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn ItemStore>,
}

impl CatalogService {
    /// Creates a catalog over the given store
    #[must_use]
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    /// Creates a new item from a JSON body
    ///
    /// # Errors
    ///
    /// - Validation errors from [`ItemPayload::parse`]
    /// - `CatalogError::Conflict` if the `item_id` is already stored
    /// - `CatalogError::Internal` if the store fails
    pub async fn create(&self, body: &[u8]) -> CatalogResult<Reply<MessageResponse>> {
        let item = ItemPayload::parse(body)?;
        tracing::debug!(?item, "Creating item");

        match self.store.insert(&item).await {
            Ok(()) => {
                tracing::info!(item_id = %item.item_id, "Item created");
                Ok(Reply::created(MessageResponse::new("Item created correctly!")))
            }
            Err(ItemStorageError::ItemExists) => Err(CatalogError::Conflict),
            Err(err) => Err(err.into()),
        }
    }

    /// Fetches one item by identifier
    ///
    /// # Errors
    ///
    /// - `CatalogError::NotFound` if no item has this `item_id`
    /// - `CatalogError::Internal` if the store fails
    pub async fn get(&self, item_id: &str) -> CatalogResult<ItemView> {
        self.store
            .get(item_id)
            .await?
            .map(ItemView::from)
            .ok_or(CatalogError::NotFound)
    }

    /// Lists every stored item
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Internal` if the store fails
    pub async fn list(&self) -> CatalogResult<Vec<ItemView>> {
        let items: Vec<ItemView> = self
            .store
            .scan()
            .await?
            .into_iter()
            .map(ItemView::from)
            .collect();

        tracing::debug!(count = items.len(), "Listed items");
        Ok(items)
    }

    /// Reads one item when `item_id` is given (and non-empty), all items otherwise
    ///
    /// # Errors
    ///
    /// See [`CatalogService::get`] and [`CatalogService::list`]
    pub async fn read(&self, item_id: Option<&str>) -> CatalogResult<Reply<ReadOutcome>> {
        let outcome = match present(item_id) {
            Some(item_id) => ReadOutcome::One(self.get(item_id).await?),
            None => ReadOutcome::Many(self.list().await?),
        };

        Ok(Reply::ok(outcome))
    }

    /// Replaces every attribute of an existing item from a JSON body
    ///
    /// # Errors
    ///
    /// - Validation errors from [`ItemPayload::parse`]
    /// - `CatalogError::UnknownItem` if no item has this `item_id`
    /// - `CatalogError::Internal` if the store fails
    pub async fn update(&self, body: &[u8]) -> CatalogResult<Reply<MessageResponse>> {
        let item = ItemPayload::parse(body)?;
        tracing::debug!(?item, "Updating item");

        match self.store.replace(&item).await {
            Ok(()) => {
                tracing::info!(item_id = %item.item_id, "Item updated");
                Ok(Reply::created(MessageResponse::new("Item updated correctly!")))
            }
            Err(ItemStorageError::ItemNotFound) => Err(CatalogError::UnknownItem),
            Err(err) => Err(err.into()),
        }
    }

    /// Deletes an item by identifier
    ///
    /// # Errors
    ///
    /// - `CatalogError::MissingItemId` if `item_id` is absent or empty
    /// - `CatalogError::UnknownDeleteTarget` if no item has this `item_id`
    /// - `CatalogError::Internal` if the store fails otherwise
    pub async fn delete(&self, item_id: Option<&str>) -> CatalogResult<Reply<MessageResponse>> {
        let item_id = present(item_id).ok_or(CatalogError::MissingItemId)?;
        tracing::debug!(item_id, "Deleting item");

        match self.store.delete(item_id).await {
            Ok(()) => {
                tracing::info!(item_id, "Item deleted");
                Ok(Reply::ok(MessageResponse::new("Item deleted successfully!")))
            }
            Err(ItemStorageError::ItemNotFound) => Err(CatalogError::UnknownDeleteTarget),
            Err(err) => Err(err.into()),
        }
    }
}

/// Treats an empty query value the same as an absent one
fn present(item_id: Option<&str>) -> Option<&str> {
    item_id.filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use async_trait::async_trait;
    use http::StatusCode;
    use item_storage::{InMemoryItemStore, Item, ItemStorageResult};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn item_body(id: &str, name: &str, category: &str, price: f64) -> Vec<u8> {
        serde_json::to_vec(&json!({
            "item_id": id,
            "item_name": name,
            "item_category": category,
            "item_price": price,
        }))
        .unwrap()
    }

    fn view(id: &str, name: &str, category: &str, price: f64) -> ItemView {
        ItemView {
            item_id: id.to_string(),
            item_name: name.to_string(),
            item_category: category.to_string(),
            item_price: price,
        }
    }

    fn setup() -> (CatalogService, Arc<InMemoryItemStore>) {
        let store = Arc::new(InMemoryItemStore::new());
        (CatalogService::new(store.clone()), store)
    }

    /// Store whose every call fails, for the server error paths
    struct BrokenStore;

    impl BrokenStore {
        fn failure() -> ItemStorageError {
            ItemStorageError::SerializationError("connection reset".to_string())
        }
    }

    #[async_trait]
    impl ItemStore for BrokenStore {
        async fn get(&self, _item_id: &str) -> ItemStorageResult<Option<Item>> {
            Err(Self::failure())
        }

        async fn insert(&self, _item: &Item) -> ItemStorageResult<()> {
            Err(Self::failure())
        }

        async fn replace(&self, _item: &Item) -> ItemStorageResult<()> {
            Err(Self::failure())
        }

        async fn delete(&self, _item_id: &str) -> ItemStorageResult<()> {
            Err(Self::failure())
        }

        async fn scan(&self) -> ItemStorageResult<Vec<Item>> {
            Err(Self::failure())
        }
    }

    #[tokio::test]
    async fn test_create_then_read_returns_same_fields() {
        let (catalog, _) = setup();

        let reply = catalog
            .create(&item_body("sku-1", "Kettle", "kitchen", 29.99))
            .await
            .unwrap();

        assert_eq!(reply.status, StatusCode::CREATED);
        assert_eq!(reply.body.message, "Item created correctly!");
        assert_eq!(
            catalog.read(Some("sku-1")).await.unwrap(),
            Reply::ok(ReadOutcome::One(view("sku-1", "Kettle", "kitchen", 29.99)))
        );
    }

    #[tokio::test]
    async fn test_create_duplicate_conflicts_and_keeps_existing() {
        let (catalog, _) = setup();
        catalog
            .create(&item_body("sku-1", "Kettle", "kitchen", 29.99))
            .await
            .unwrap();

        let err = catalog
            .create(&item_body("sku-1", "Toaster", "kitchen", 45.0))
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::Conflict));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            catalog.get("sku-1").await.unwrap(),
            view("sku-1", "Kettle", "kitchen", 29.99)
        );
    }

    #[tokio::test]
    async fn test_create_with_missing_field_writes_nothing() {
        let (catalog, store) = setup();

        for missing in ["item_id", "item_name", "item_category", "item_price"] {
            let mut body = json!({
                "item_id": "sku-2",
                "item_name": "Pan",
                "item_category": "kitchen",
                "item_price": 10.0,
            });
            body.as_object_mut().unwrap().remove(missing);

            let err = catalog
                .create(&serde_json::to_vec(&body).unwrap())
                .await
                .unwrap_err();

            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
            assert!(matches!(err, CatalogError::MissingFields(ref fields) if fields == &[missing]));
        }

        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_read_unknown_item_is_not_found() {
        let (catalog, _) = setup();

        let err = catalog.read(Some("nope")).await.unwrap_err();

        assert!(matches!(err, CatalogError::NotFound));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.body().message, "Item not found.");
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let (catalog, _) = setup();

        let reply = catalog.read(None).await.unwrap();

        assert_eq!(reply, Reply::ok(ReadOutcome::Many(vec![])));
        assert_eq!(serde_json::to_value(&reply.body).unwrap(), json!([]));
    }

    #[tokio::test]
    async fn test_read_with_empty_item_id_lists() {
        let (catalog, _) = setup();
        catalog
            .create(&item_body("sku-1", "Cup", "kitchen", 2.0))
            .await
            .unwrap();

        let reply = catalog.read(Some("")).await.unwrap();

        assert_eq!(
            reply,
            Reply::ok(ReadOutcome::Many(vec![view("sku-1", "Cup", "kitchen", 2.0)]))
        );
    }

    #[tokio::test]
    async fn test_list_returns_every_created_item() {
        let (catalog, _) = setup();
        for i in 0..4 {
            catalog
                .create(&item_body(&format!("sku-{i}"), "Cup", "kitchen", f64::from(i)))
                .await
                .unwrap();
        }

        // An empty item_id is treated as absent
        let Reply { status, body } = catalog.read(Some("")).await.unwrap();
        let ReadOutcome::Many(mut items) = body else {
            panic!("expected a listing");
        };
        items.sort_by(|a, b| a.item_id.cmp(&b.item_id));

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            items,
            (0..4)
                .map(|i| view(&format!("sku-{i}"), "Cup", "kitchen", f64::from(i)))
                .collect::<Vec<_>>()
        );
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let (catalog, _) = setup();
        catalog
            .create(&item_body("sku-1", "Kettle", "kitchen", 29.99))
            .await
            .unwrap();

        let reply = catalog
            .update(&item_body("sku-1", "Smart kettle", "appliances", 59.5))
            .await
            .unwrap();

        assert_eq!(reply.status, StatusCode::CREATED);
        assert_eq!(reply.body.message, "Item updated correctly!");
        assert_eq!(
            catalog.get("sku-1").await.unwrap(),
            view("sku-1", "Smart kettle", "appliances", 59.5)
        );
    }

    #[tokio::test]
    async fn test_update_unknown_item_is_client_error_without_write() {
        let (catalog, store) = setup();

        let err = catalog
            .update(&item_body("ghost", "Kettle", "kitchen", 1.0))
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::UnknownItem));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.body().message, "No Item found with the specified ID.");
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_update_with_missing_field_is_rejected() {
        let (catalog, _) = setup();

        let err = catalog
            .update(br#"{"item_id": "sku-1"}"#)
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::MissingFields(ref fields) if fields.len() == 3));
    }

    #[tokio::test]
    async fn test_delete_existing_then_read_is_not_found() {
        let (catalog, _) = setup();
        catalog
            .create(&item_body("sku-1", "Kettle", "kitchen", 29.99))
            .await
            .unwrap();

        let reply = catalog.delete(Some("sku-1")).await.unwrap();

        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(reply.body.message, "Item deleted successfully!");
        assert!(matches!(
            catalog.read(Some("sku-1")).await,
            Err(CatalogError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_delete_without_item_id() {
        let (catalog, _) = setup();

        for item_id in [None, Some("")] {
            let err = catalog.delete(item_id).await.unwrap_err();
            assert!(matches!(err, CatalogError::MissingItemId));
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn test_delete_unknown_item() {
        let (catalog, _) = setup();

        let err = catalog.delete(Some("ghost")).await.unwrap_err();

        assert!(matches!(err, CatalogError::UnknownDeleteTarget));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.kind(), ErrorKind::ValidationError);
        assert_eq!(err.body().message, "No Item found with the specified ID.");
    }

    #[tokio::test]
    async fn test_store_failures_are_internal_errors() {
        let catalog = CatalogService::new(Arc::new(BrokenStore));
        let body = item_body("sku-1", "Kettle", "kitchen", 1.0);

        let errors = [
            catalog.create(&body).await.unwrap_err(),
            catalog.read(Some("sku-1")).await.unwrap_err(),
            catalog.read(None).await.unwrap_err(),
            catalog.update(&body).await.unwrap_err(),
            catalog.delete(Some("sku-1")).await.unwrap_err(),
        ];

        for err in errors {
            assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(err.kind(), ErrorKind::InternalError);
            assert!(err.body().message.starts_with("Server error: "));
            assert!(err.body().message.contains("connection reset"));
        }
    }

    #[tokio::test]
    async fn test_full_round_trip() {
        let (catalog, _) = setup();

        catalog
            .create(&item_body("sku-9", "Blender", "appliances", 80.0))
            .await
            .unwrap();
        assert_eq!(
            catalog.get("sku-9").await.unwrap(),
            view("sku-9", "Blender", "appliances", 80.0)
        );

        catalog
            .update(&item_body("sku-9", "Blender Pro", "kitchen", 99.25))
            .await
            .unwrap();
        assert_eq!(
            catalog.get("sku-9").await.unwrap(),
            view("sku-9", "Blender Pro", "kitchen", 99.25)
        );

        catalog.delete(Some("sku-9")).await.unwrap();
        assert_eq!(
            catalog.get("sku-9").await.unwrap_err().status(),
            StatusCode::NOT_FOUND
        );
    }
}

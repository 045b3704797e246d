/// Catalog item handlers
pub mod items;

use aide::axum::{routing::post, ApiRouter};

/// Creates the v1 API router with all v1 handler routes
pub fn handler() -> ApiRouter {
    ApiRouter::new().api_route(
        "/v1/items",
        post(items::create_item)
            .get(items::read_items)
            .put(items::update_item)
            .delete(items::delete_item),
    )
}

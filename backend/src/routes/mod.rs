mod docs;
mod health;
/// Version 1 API routes
pub mod v1;

use aide::axum::{routing::get, ApiRouter};

use crate::types::Environment;

/// Creates the router with all handler routes
pub fn handler(environment: Environment) -> ApiRouter {
    let router = ApiRouter::new()
        .api_route("/health", get(health::handler))
        .merge(v1::handler());

    if environment.show_api_docs() {
        router.merge(docs::handler())
    } else {
        router
    }
}

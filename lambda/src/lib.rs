//! API Gateway Lambda functions for the catalog
//!
//! Every catalog operation is deployed as its own function. The binaries only
//! pick the operation; configuration, store setup and request/response
//! translation live here.

use std::sync::Arc;

use catalog::{CatalogResult, CatalogService, Reply};
use catalog_environment::{Environment, StoreConfig};
use lambda_http::{
    http::header::CONTENT_TYPE, service_fn, Body, Error, Request, RequestExt, Response,
};
use serde::Serialize;
use strum::Display;

/// Catalog operation served by a Lambda function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Operation {
    /// `POST` with a JSON item body
    CreateItem,
    /// `GET` with an optional `item_id` query parameter
    GetItem,
    /// `PUT` with a JSON item body
    UpdateItem,
    /// `DELETE` with an `item_id` query parameter
    DeleteItem,
}

/// Loads configuration, connects the item store and serves `operation`
///
/// Configuration problems abort the cold start instead of failing each request.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the runtime fails
pub async fn run(operation: Operation) -> Result<(), Error> {
    let environment = Environment::from_env()?;
    environment.init_tracing();

    let store_config = StoreConfig::from_env()?;
    let catalog = CatalogService::new(Arc::new(store_config.connect().await));

    tracing::info!(%operation, %environment, "Starting catalog function");

    lambda_http::run(service_fn(|event| handle(&catalog, operation, event))).await
}

/// Runs `operation` for one API Gateway proxy event
///
/// # Errors
///
/// Returns an error only if the response cannot be built; catalog failures are
/// answered with their status and JSON error body.
pub async fn handle(
    catalog: &CatalogService,
    operation: Operation,
    event: Request,
) -> Result<Response<Body>, Error> {
    let params = event.query_string_parameters();
    let item_id = params.first("item_id");
    let body: &[u8] = event.body().as_ref();

    tracing::debug!(%operation, item_id, "Received request");

    match operation {
        Operation::CreateItem => respond(catalog.create(body).await),
        Operation::GetItem => respond(catalog.read(item_id).await),
        Operation::UpdateItem => respond(catalog.update(body).await),
        Operation::DeleteItem => respond(catalog.delete(item_id).await),
    }
}

fn respond<T: Serialize>(result: CatalogResult<Reply<T>>) -> Result<Response<Body>, Error> {
    let (status, body) = match result {
        Ok(reply) => (reply.status, serde_json::to_string(&reply.body)?),
        Err(err) => {
            err.trace();
            (err.status(), serde_json::to_string(&err.body())?)
        }
    };

    Ok(Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::Text(body))?)
}

//! Custom extractors for item requests

use aide::operation::OperationInput;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    Json,
};
use catalog::{CatalogError, ItemView};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::types::error::AppError;

/// Raw item body, validated by the catalog codec
///
/// The body is read as bytes instead of through `Json` so that a missing
/// `Content-Type` header (common behind API gateways) is not a rejection and
/// every parse failure gets the catalog's own error body.
pub struct ItemBody(pub Bytes);

impl<S> FromRequest<S> for ItemBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|err| AppError::from(CatalogError::InvalidPayload(err.body_text())))?;

        Ok(Self(body))
    }
}

impl OperationInput for ItemBody {
    fn operation_input(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) {
        // Same shape as the read projection: all four fields are required
        Json::<ItemView>::operation_input(ctx, operation);
    }
}

/// Query parameters selecting an item
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ItemQuery {
    /// Identifier of the item; omit on `GET` to list all items
    pub item_id: Option<String>,
}

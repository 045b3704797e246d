//! Universal error handling for the API

use aide::OperationOutput;
use axum::{
    response::{IntoResponse, Response},
    Json,
};
use catalog::{CatalogError, ErrorBody};

/// Application error type that wraps a catalog failure
#[derive(Debug)]
pub struct AppError(CatalogError);

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Client errors are logged at warn, server errors at error
        self.0.trace();

        (self.0.status(), Json(self.0.body())).into_response()
    }
}

impl OperationOutput for AppError {
    type Inner = ErrorBody;

    fn operation_response(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Option<aide::openapi::Response> {
        Json::<ErrorBody>::operation_response(ctx, operation)
    }
}

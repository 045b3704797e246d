use aide::OperationOutput;
use axum::{
    response::{IntoResponse, Response},
    Json,
};
use catalog::Reply;
use schemars::JsonSchema;
use serde::Serialize;

/// JSON response carrying the status chosen by the catalog operation
pub struct JsonReply<T>(pub Reply<T>);

impl<T> From<Reply<T>> for JsonReply<T> {
    fn from(reply: Reply<T>) -> Self {
        Self(reply)
    }
}

impl<T: Serialize> IntoResponse for JsonReply<T> {
    fn into_response(self) -> Response {
        (self.0.status, Json(self.0.body)).into_response()
    }
}

impl<T: JsonSchema> OperationOutput for JsonReply<T> {
    type Inner = T;

    fn operation_response(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Option<aide::openapi::Response> {
        Json::<T>::operation_response(ctx, operation)
    }
}

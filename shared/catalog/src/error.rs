//! Catalog errors and their client facing representation

use http::StatusCode;
use item_storage::ItemStorageError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::Display;
use thiserror::Error;

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Error category reported in the `error` field of a failed response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed or missing input
    ValidationError,
    /// Duplicate identifier on create
    ConflictError,
    /// Referenced identifier is absent
    NotFoundError,
    /// Store or runtime failure
    InternalError,
}

/// Failures of a catalog operation
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The body is not JSON or a field has the wrong JSON type
    #[error("Invalid request body: {0}")]
    InvalidPayload(String),

    /// Required fields absent from the body, in declaration order
    #[error("Missing some parameters in the body of the request.")]
    MissingFields(Vec<String>),

    /// Fields present but holding unusable values
    #[error("Invalid values for some parameters in the body of the request.")]
    InvalidFields(Vec<String>),

    /// `item_id` query parameter absent on delete
    #[error("Missing the item_id parameter in the query string.")]
    MissingItemId,

    /// Create with an `item_id` that is already stored
    #[error("An Item with the same ID already exists.")]
    Conflict,

    /// Read of an unknown `item_id`
    #[error("Item not found.")]
    NotFound,

    /// Update of an unknown `item_id`
    #[error("No Item found with the specified ID.")]
    UnknownItem,

    /// Delete of an unknown `item_id`
    #[error("No Item found with the specified ID.")]
    UnknownDeleteTarget,

    /// Any other store failure
    #[error("Server error: {0}")]
    Internal(#[from] ItemStorageError),
}

/// JSON body of a failed response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorBody {
    /// Error category
    pub error: ErrorKind,
    /// Human-readable error message
    pub message: String,
    /// Offending field names, for body validation failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl CatalogError {
    /// Error category of this failure
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidPayload(_)
            | Self::MissingFields(_)
            | Self::InvalidFields(_)
            | Self::MissingItemId
            | Self::UnknownDeleteTarget => ErrorKind::ValidationError,
            Self::Conflict => ErrorKind::ConflictError,
            Self::NotFound | Self::UnknownItem => ErrorKind::NotFoundError,
            Self::Internal(_) => ErrorKind::InternalError,
        }
    }

    /// HTTP status of this failure
    ///
    /// Unknown identifiers on update and delete are client errors (400), only a
    /// read of an unknown identifier answers 404.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// Response body for this failure
    #[must_use]
    pub fn body(&self) -> ErrorBody {
        let details = match self {
            Self::MissingFields(fields) | Self::InvalidFields(fields) => Some(fields.clone()),
            _ => None,
        };

        ErrorBody {
            error: self.kind(),
            message: self.to_string(),
            details,
        }
    }

    /// Logs the failure at a level matching its status
    ///
    /// Store failures are logged with their full error chain, which the
    /// response body leaves out.
    pub fn trace(&self) {
        let status = self.status().as_u16();
        if let Self::Internal(err) = self {
            tracing::error!(status, kind = %self.kind(), context = %err.context(), "{self}");
        } else {
            tracing::warn!(status, kind = %self.kind(), "{self}");
        }
    }
}

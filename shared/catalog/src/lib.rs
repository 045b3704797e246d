//! Catalog item CRUD contract
//!
//! Transport independent request handling shared by the HTTP server and the
//! per-operation Lambda functions: payload validation, the read projection,
//! the five operations and the mapping of their failures to HTTP statuses.

mod error;
mod payload;
mod response;
mod service;

pub use error::{CatalogError, CatalogResult, ErrorBody, ErrorKind};
pub use payload::ItemPayload;
pub use response::{ItemView, MessageResponse, ReadOutcome, Reply};
pub use service::CatalogService;

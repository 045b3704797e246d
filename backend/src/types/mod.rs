mod error;
mod extractors;
mod reply;

pub use catalog_environment::{Environment, StoreConfig};
pub use error::AppError;
pub use extractors::{ItemBody, ItemQuery};
pub use reply::JsonReply;

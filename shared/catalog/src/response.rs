//! Successful operation outputs

use http::StatusCode;
use item_storage::Item;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Read projection of a stored item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ItemView {
    /// Item identifier
    pub item_id: String,
    /// Item name
    pub item_name: String,
    /// Item category
    pub item_category: String,
    /// Item price
    pub item_price: f64,
}

impl From<Item> for ItemView {
    fn from(item: Item) -> Self {
        Self {
            item_id: item.item_id,
            item_name: item.item_name,
            item_category: item.item_category,
            item_price: item.item_price,
        }
    }
}

/// Status response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MessageResponse {
    /// Human-readable outcome
    pub message: String,
}

impl MessageResponse {
    /// Creates a status body with the given message
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result of a read: one item when an identifier was given, all items otherwise
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum ReadOutcome {
    /// Single item lookup
    One(ItemView),
    /// Full listing, in store defined order
    Many(Vec<ItemView>),
}

/// Successful operation output with its HTTP status
#[derive(Debug, Clone, PartialEq)]
pub struct Reply<T> {
    /// HTTP status to answer with
    pub status: StatusCode,
    /// JSON body
    pub body: T,
}

impl<T> Reply<T> {
    /// `200 OK` reply
    pub const fn ok(body: T) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    /// `201 CREATED` reply
    pub const fn created(body: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            body,
        }
    }
}

//! Request body codec shared by create and update

use item_storage::{Item, ItemAttribute};
use serde::Deserialize;
use strum::IntoEnumIterator;
use validator::Validate;

use crate::error::{CatalogError, CatalogResult};

/// Full item record as sent by the caller on create and update
///
/// Every field is optional at the deserialization step so that all missing
/// fields can be reported together by validation instead of failing on the
/// first one. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ItemPayload {
    /// Caller assigned identifier
    #[validate(required, length(min = 1))]
    pub item_id: Option<String>,
    /// Item name
    #[validate(required)]
    pub item_name: Option<String>,
    /// Item category
    #[validate(required)]
    pub item_category: Option<String>,
    /// Item price, any JSON number
    #[validate(required)]
    pub item_price: Option<f64>,
}

impl ItemPayload {
    /// Parses and validates a raw request body into a complete item
    ///
    /// # Errors
    ///
    /// - `CatalogError::InvalidPayload` if the body is not a JSON object or a
    ///   field has the wrong JSON type
    /// - `CatalogError::MissingFields` listing every absent (or `null`) field
    /// - `CatalogError::InvalidFields` if `item_id` is empty
    pub fn parse(body: &[u8]) -> CatalogResult<Item> {
        let payload: Self = serde_json::from_slice(body)
            .map_err(|err| CatalogError::InvalidPayload(err.to_string()))?;

        payload.into_item()
    }

    /// Validates the payload and converts it into an item
    ///
    /// # Errors
    ///
    /// See [`ItemPayload::parse`]
    pub fn into_item(self) -> CatalogResult<Item> {
        if let Err(errors) = self.validate() {
            let field_errors = errors.field_errors();
            let mut missing = Vec::new();
            let mut invalid = Vec::new();

            // Report fields in declaration order rather than hash order
            for attribute in ItemAttribute::iter() {
                let name = attribute.to_string();
                let Some(errors) = field_errors.get(name.as_str()) else {
                    continue;
                };
                if errors.iter().any(|error| error.code == "required") {
                    missing.push(name);
                } else {
                    invalid.push(name);
                }
            }

            return Err(if missing.is_empty() {
                CatalogError::InvalidFields(invalid)
            } else {
                CatalogError::MissingFields(missing)
            });
        }

        match (
            self.item_id,
            self.item_name,
            self.item_category,
            self.item_price,
        ) {
            (Some(item_id), Some(item_name), Some(item_category), Some(item_price)) => Ok(Item {
                item_id,
                item_name,
                item_category,
                item_price,
            }),
            // Presence was checked by `validate`
            _ => Err(CatalogError::MissingFields(Vec::new())),
        }
    }
}

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, ValueObject};

/// A stock item: label, unit price, quantity on hand.
///
/// Validity (`price > 0`, `quantity >= 0`, non-empty name) is checked by the
/// store before anything is committed, so every stored item satisfies the
/// constraints at all times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

impl ValueObject for Item {}

impl Item {
    pub fn new(name: impl Into<String>, price: f64, quantity: i64) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Check the item constraints.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::invalid_item("name cannot be empty"));
        }
        // NaN fails the comparison and is rejected along with 0 and negatives.
        if !(self.price > 0.0) {
            return Err(DomainError::invalid_item(
                "price must be strictly greater than 0",
            ));
        }
        if self.quantity < 0 {
            return Err(DomainError::invalid_item("quantity cannot be negative"));
        }
        Ok(())
    }

    /// Build the item that would result from applying `patch`, leaving `self`
    /// untouched. Fields absent from the patch retain their prior values.
    ///
    /// The result is *not* validated here; the store validates the merged
    /// value before committing it.
    pub fn merged(&self, patch: &ItemPatch) -> Item {
        Item {
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            price: patch.price.unwrap_or(self.price),
            quantity: patch.quantity.unwrap_or(self.quantity),
        }
    }
}

/// Partial update payload: each field is wrapped in an explicit presence
/// indicator, so "not supplied" and "supplied" are distinguishable without
/// any runtime introspection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.quantity.is_none()
    }
}

/// The stored pair: caller-assigned id plus the item value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub id: String,
    pub item: Item,
}

impl InventoryRecord {
    pub fn new(id: impl Into<String>, item: Item) -> Self {
        Self {
            id: id.into(),
            item,
        }
    }
}

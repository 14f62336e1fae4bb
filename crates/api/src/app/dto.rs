use serde::{Deserialize, Serialize};

use stockroom_inventory::{InventoryRecord, Item, ItemPatch};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

impl From<CreateItemRequest> for Item {
    fn from(req: CreateItemRequest) -> Self {
        Item::new(req.name, req.price, req.quantity)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateItemRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub quantity: Option<i64>,
}

impl From<UpdateItemRequest> for ItemPatch {
    fn from(req: UpdateItemRequest) -> Self {
        ItemPatch {
            name: req.name,
            price: req.price,
            quantity: req.quantity,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ByNameParams {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CombinedParams {
    #[serde(default)]
    pub name: Option<String>,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub item_id: String,
    pub details: Item,
}

impl From<InventoryRecord> for ItemResponse {
    fn from(record: InventoryRecord) -> Self {
        Self {
            item_id: record.id,
            details: record.item,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdatedItemResponse {
    pub item_id: String,
    pub updated: Item,
}

impl From<InventoryRecord> for UpdatedItemResponse {
    fn from(record: InventoryRecord) -> Self {
        Self {
            item_id: record.id,
            updated: record.item,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteItemResponse {
    pub message: String,
    pub item_id: String,
}

#[derive(Debug, Serialize)]
pub struct ListItemsResponse {
    pub count: usize,
    pub items: Vec<ItemResponse>,
}

use std::collections::BTreeMap;

use serde::Serialize;

use stockroom_core::ItemId;
use stockroom_inventory::{Category, Item, ItemPatch, ItemQuery};

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct ItemsResponse {
    pub items: BTreeMap<ItemId, Item>,
}

/// Echo of the query parameters together with the matching items.
#[derive(Debug, Serialize)]
pub struct SelectionEcho {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub count: Option<i64>,
    pub category: Option<Category>,
    pub selection: Vec<Item>,
}

impl SelectionEcho {
    pub fn new(query: ItemQuery, selection: Vec<Item>) -> Self {
        Self {
            name: query.name,
            price: query.price,
            count: query.count,
            category: query.category,
            selection,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub query: SelectionEcho,
}

#[derive(Debug, Serialize)]
pub struct AddedResponse {
    pub added: Item,
}

#[derive(Debug, Serialize)]
pub struct UpdatedResponse {
    pub query: ItemPatch,
    pub updated: Item,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub deleted: Item,
}

use serde::{Deserialize, Serialize};

use stockroom_core::ItemId;

/// Kind of inventory item. Closed set.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tools,
    Consumables,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Tools => "tools",
            Category::Consumables => "consumables",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One inventory entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: f64,
    pub count: u32,
    pub id: ItemId,
    pub category: Category,
}

impl Item {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        price: f64,
        count: u32,
        category: Category,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            count,
            id,
            category,
        }
    }
}

/// Partial update of an item. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub count: Option<u32>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.count.is_none()
    }

    pub fn apply_to(&self, item: &mut Item) {
        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(price) = self.price {
            item.price = price;
        }
        if let Some(count) = self.count {
            item.count = count;
        }
    }
}

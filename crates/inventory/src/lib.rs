//! Inventory domain module.
//!
//! Item records, the query predicate, and the in-memory table that holds all
//! state (no IO, no HTTP).

pub mod item;
pub mod query;
pub mod store;

pub use item::{Category, Item, ItemPatch};
pub use query::ItemQuery;
pub use store::{seed_items, InMemoryInventory, InventoryStore};

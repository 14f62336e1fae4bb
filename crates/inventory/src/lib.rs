//! Inventory domain module.
//!
//! This crate contains the item types and the in-memory inventory store,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod item;
pub mod store;

pub use item::{InventoryRecord, Item, ItemPatch};
pub use store::InventoryStore;

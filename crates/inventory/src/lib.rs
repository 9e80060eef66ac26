//! Inventory domain module.
//!
//! This crate contains the business rules for a name-keyed stock table,
//! implemented purely as deterministic domain logic (no console IO, no storage).

pub mod inventory;
pub mod item;

pub use inventory::{
    AddItem, DuplicatePolicy, EditItem, Inventory, InventoryCommand, InventoryEvent, ItemAdded,
    ItemEdited, ItemSold, SellItem, UnknownDuplicatePolicy,
};
pub use item::{Item, ItemDraft, Price};

use std::collections::HashMap;
use std::collections::hash_map;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockroom_core::{Aggregate, DomainError, DomainResult, Entity};
use stockroom_events::Event;

use crate::item::{Item, Price};

/// How `add` and `edit` treat a name that is already in use by another item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Replace the stored item, discarding its unsold stock.
    #[default]
    Overwrite,
    /// Refuse the operation with a conflict error.
    Reject,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown duplicate policy: {0} (expected overwrite or reject)")]
pub struct UnknownDuplicatePolicy(pub String);

impl core::str::FromStr for DuplicatePolicy {
    type Err = UnknownDuplicatePolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overwrite" => Ok(Self::Overwrite),
            "reject" => Ok(Self::Reject),
            other => Err(UnknownDuplicatePolicy(other.to_string())),
        }
    }
}

/// Aggregate root: Inventory.
///
/// A name-keyed table of items plus the money earned from sales. Every key
/// equals the name of the item stored under it, and no stored item has a
/// quantity of zero.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: HashMap<String, Item>,
    total_money: f64,
    policy: DuplicatePolicy,
    version: u64,
}

/// Command: AddItem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddItem {
    pub item: Item,
    pub occurred_at: DateTime<Utc>,
}

/// Command: SellItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellItem {
    pub name: String,
    pub amount: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Command: EditItem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditItem {
    pub name: String,
    pub replacement: Item,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InventoryCommand {
    AddItem(AddItem),
    SellItem(SellItem),
    EditItem(EditItem),
}

/// Event: ItemAdded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub item: Item,
    /// The item previously stored under the same name, if it was overwritten.
    pub replaced: Option<Item>,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemSold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSold {
    pub name: String,
    pub amount: u32,
    pub unit_price: Price,
    pub earned: f64,
    /// Stock left after the sale. Zero means the item was removed.
    pub remaining: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemEdited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemEdited {
    pub previous_name: String,
    pub item: Item,
    /// A different item that was stored under the new name and got overwritten.
    pub displaced: Option<Item>,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InventoryEvent {
    ItemAdded(ItemAdded),
    ItemSold(ItemSold),
    ItemEdited(ItemEdited),
}

impl Event for InventoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::ItemAdded(_) => "inventory.item.added",
            InventoryEvent::ItemSold(_) => "inventory.item.sold",
            InventoryEvent::ItemEdited(_) => "inventory.item.edited",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            InventoryEvent::ItemAdded(e) => e.occurred_at,
            InventoryEvent::ItemSold(e) => e.occurred_at,
            InventoryEvent::ItemEdited(e) => e.occurred_at,
        }
    }
}

impl From<ItemAdded> for InventoryEvent {
    fn from(e: ItemAdded) -> Self {
        Self::ItemAdded(e)
    }
}

impl From<ItemSold> for InventoryEvent {
    fn from(e: ItemSold) -> Self {
        Self::ItemSold(e)
    }
}

impl From<ItemEdited> for InventoryEvent {
    fn from(e: ItemEdited) -> Self {
        Self::ItemEdited(e)
    }
}

impl Aggregate for Inventory {
    type Command = InventoryCommand;
    type Event = InventoryEvent;
    type Error = DomainError;

    fn version(&self) -> u64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match event {
            InventoryEvent::ItemAdded(e) => {
                self.items.insert(e.item.id().clone(), e.item.clone());
            }
            InventoryEvent::ItemSold(e) => {
                if e.remaining == 0 {
                    self.items.remove(&e.name);
                } else if let Some(item) = self.items.get_mut(&e.name) {
                    item.set_quantity(e.remaining);
                }
                self.total_money += e.earned;
            }
            InventoryEvent::ItemEdited(e) => {
                // Old key out, new key in, within one event.
                self.items.remove(&e.previous_name);
                self.items.insert(e.item.id().clone(), e.item.clone());
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        let event: InventoryEvent = match command {
            InventoryCommand::AddItem(cmd) => self.decide_add(cmd)?.into(),
            InventoryCommand::SellItem(cmd) => self.decide_sell(cmd)?.into(),
            InventoryCommand::EditItem(cmd) => self.decide_edit(cmd)?.into(),
        };
        Ok(vec![event])
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    pub fn total_money(&self) -> f64 {
        self.total_money
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    pub fn iter(&self) -> hash_map::Values<'_, String, Item> {
        self.items.values()
    }

    /// Stock an item under `name`.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        quantity: u32,
        price: f64,
    ) -> DomainResult<ItemAdded> {
        let cmd = AddItem {
            item: Item::new(name, price, quantity)?,
            occurred_at: Utc::now(),
        };
        let added = self.decide_add(&cmd)?;
        self.apply(&InventoryEvent::ItemAdded(added.clone()));
        Ok(added)
    }

    /// Sell `amount` units of `name`, crediting the proceeds to `total_money`.
    pub fn sell(&mut self, name: &str, amount: u32) -> DomainResult<ItemSold> {
        let cmd = SellItem {
            name: name.to_string(),
            amount,
            occurred_at: Utc::now(),
        };
        let sold = self.decide_sell(&cmd)?;
        self.apply(&InventoryEvent::ItemSold(sold.clone()));
        Ok(sold)
    }

    pub fn find(&self, name: &str) -> DomainResult<&Item> {
        self.items
            .get(name)
            .ok_or_else(|| DomainError::not_found(name))
    }

    /// Replace every field of `name`, re-keying it if the name changed.
    pub fn edit(&mut self, name: &str, replacement: Item) -> DomainResult<ItemEdited> {
        let cmd = EditItem {
            name: name.to_string(),
            replacement,
            occurred_at: Utc::now(),
        };
        let edited = self.decide_edit(&cmd)?;
        self.apply(&InventoryEvent::ItemEdited(edited.clone()));
        Ok(edited)
    }

    /// All items, sorted by name. Empty when the inventory is empty.
    pub fn list(&self) -> Vec<&Item> {
        let mut items: Vec<&Item> = self.items.values().collect();
        items.sort_by(|a, b| a.name().cmp(b.name()));
        items
    }

    fn ensure_in_stock(item: &Item) -> DomainResult<()> {
        if item.quantity() == 0 {
            return Err(DomainError::validation("quantity must be greater than zero"));
        }
        Ok(())
    }

    fn decide_add(&self, cmd: &AddItem) -> DomainResult<ItemAdded> {
        Self::ensure_in_stock(&cmd.item)?;

        let replaced = self.items.get(cmd.item.name()).cloned();
        if replaced.is_some() && self.policy == DuplicatePolicy::Reject {
            return Err(DomainError::conflict(format!(
                "item {} already exists",
                cmd.item.name()
            )));
        }

        Ok(ItemAdded {
            item: cmd.item.clone(),
            replaced,
            occurred_at: cmd.occurred_at,
        })
    }

    fn decide_sell(&self, cmd: &SellItem) -> DomainResult<ItemSold> {
        let item = self.find(&cmd.name)?;

        if cmd.amount > item.quantity() {
            return Err(DomainError::insufficient(
                item.name(),
                cmd.amount,
                item.quantity(),
            ));
        }

        Ok(ItemSold {
            name: cmd.name.clone(),
            amount: cmd.amount,
            unit_price: item.price(),
            earned: item.price().times(cmd.amount),
            remaining: item.quantity() - cmd.amount,
            occurred_at: cmd.occurred_at,
        })
    }

    fn decide_edit(&self, cmd: &EditItem) -> DomainResult<ItemEdited> {
        self.find(&cmd.name)?;
        Self::ensure_in_stock(&cmd.replacement)?;

        let new_name = cmd.replacement.name();
        let displaced = if new_name == cmd.name {
            None
        } else {
            self.items.get(new_name).cloned()
        };
        if displaced.is_some() && self.policy == DuplicatePolicy::Reject {
            return Err(DomainError::conflict(format!("item {new_name} already exists")));
        }

        Ok(ItemEdited {
            previous_name: cmd.name.clone(),
            item: cmd.replacement.clone(),
            displaced,
            occurred_at: cmd.occurred_at,
        })
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Item;
    type IntoIter = hash_map::Values<'a, String, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

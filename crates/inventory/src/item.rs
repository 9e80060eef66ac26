use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, ValueObject};

/// Unit price of an item.
///
/// Always finite and non-negative.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub fn new(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }
        if amount < 0.0 {
            return Err(DomainError::validation("price cannot be negative"));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> f64 {
        self.0
    }

    /// Money received for selling `units` at this price.
    pub fn times(&self, units: u32) -> f64 {
        self.0 * f64::from(units)
    }
}

impl ValueObject for Price {}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A single stock-keeping record.
///
/// The name is the item's identity: the inventory stores every item under its
/// own name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    price: Price,
    quantity: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, price: f64, quantity: u32) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(Self {
            name,
            price: Price::new(price)?,
            quantity,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}

impl Entity for Item {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Item name: {}\nQuantity: {}\nPrice: {}",
            self.name, self.quantity, self.price
        )
    }
}

/// Item fields as typed by the user, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

impl ItemDraft {
    pub fn into_item(self) -> DomainResult<Item> {
        Item::new(self.name, self.price, self.quantity)
    }
}

impl TryFrom<ItemDraft> for Item {
    type Error = DomainError;

    fn try_from(draft: ItemDraft) -> Result<Self, Self::Error> {
        draft.into_item()
    }
}

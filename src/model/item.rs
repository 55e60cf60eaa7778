use serde::{Deserialize, Serialize};

use super::is_blank;

/// A purchasable entry inside a shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    /// Free-text category such as "dairy" or "produce". May be empty.
    pub section: String,
    pub quantity: u32,
    pub bought: bool,
}

impl Item {
    /// Flip the bought flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.bought = !self.bought;
        self.bought
    }
}

/// Payload for adding an item to a list.
///
/// Any `id` or `bought` value a client sends is ignored; the store assigns
/// the id and every new item starts unbought.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub quantity: u32,
}

impl NewItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }

    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Materialise the stored item under the given id.
    pub(crate) fn into_item(self, id: String) -> Item {
        Item {
            id,
            name: self.name.trim().to_string(),
            section: self.section,
            quantity: self.quantity,
            bought: false,
        }
    }
}

/// Partial update for an existing item.
///
/// Only meaningful fields are applied: a blank `name` or `section` and a
/// zero `quantity` leave the stored value alone. `bought` is not part of
/// the patch; use toggle for that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub quantity: Option<u32>,
}

impl ItemPatch {
    pub fn apply_to(&self, item: &mut Item) {
        if let Some(name) = self.name.as_deref().filter(|name| !is_blank(name)) {
            item.name = name.trim().to_string();
        }
        if let Some(section) = self.section.as_deref().filter(|section| !section.is_empty()) {
            item.section = section.to_string();
        }
        if let Some(quantity) = self.quantity.filter(|quantity| *quantity > 0) {
            item.quantity = quantity;
        }
    }
}

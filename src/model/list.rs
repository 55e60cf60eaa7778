use serde::{Deserialize, Serialize};

use super::{normalize_name, Item};

/// A named, ordered container of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingList {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// The `{id, name}` view of a list used when enumerating lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSummary {
    pub id: String,
    pub name: String,
}

impl ShoppingList {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn summary(&self) -> ListSummary {
        ListSummary {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }

    /// Whether this list's name collides with `name` once both are normalized.
    pub fn is_named(&self, name: &str) -> bool {
        normalize_name(&self.name) == normalize_name(name)
    }

    /// Whether an item with the same normalized name is already in the list.
    pub fn has_item_named(&self, name: &str) -> bool {
        let key = normalize_name(name);
        self.items.iter().any(|item| normalize_name(&item.name) == key)
    }

    pub fn item(&self, item_id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == item_id)
    }

    pub fn item_mut(&mut self, item_id: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == item_id)
    }

    /// Remove one item by id, keeping the order of the rest.
    pub fn remove_item(&mut self, item_id: &str) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == item_id)?;
        Some(self.items.remove(index))
    }

    /// Remove every bought item, keeping the order of the rest.
    pub fn remove_bought(&mut self) -> Vec<Item> {
        let (bought, kept): (Vec<Item>, Vec<Item>) = std::mem::take(&mut self.items)
            .into_iter()
            .partition(|item| item.bought);
        self.items = kept;
        bought
    }
}

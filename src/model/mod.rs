//! Models - the shopping list aggregate and its items.
//!
//! A [`ShoppingList`] owns an ordered sequence of [`Item`]s. Items never
//! exist outside a list, and ids for both are handed out by the store's
//! [`IdAllocator`](crate::IdAllocator).
//!
//! ## Example
//!
//! ```ignore
//! use shopping_lists::{InMemoryListStore, ListStore, NewItem};
//!
//! let store = InMemoryListStore::new();
//! let list = store.create_list("Weekly", Vec::new())?;
//! let bread = store.add_item(&list.id, NewItem::new("Bread").section("bakery").quantity(1))?;
//! let bread = store.toggle_item(&list.id, &bread.id)?;
//! assert!(bread.bought);
//! ```

mod item;
mod list;

pub use item::{Item, ItemPatch, NewItem};
pub use list::{ListSummary, ShoppingList};

/// Comparison key for list and item names: trimmed and lower-cased.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Whether a name is blank once surrounding whitespace is removed.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

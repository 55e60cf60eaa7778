//! ListStore - the operations over shopping lists and their items.

mod in_memory;

pub use in_memory::InMemoryListStore;

use crate::error::StoreError;
use crate::model::{Item, ItemPatch, ListSummary, NewItem, ShoppingList};

/// Storage for shopping lists.
///
/// Every operation either succeeds completely or fails without changing
/// anything. Lists keep insertion order; items keep insertion order within
/// their list.
pub trait ListStore: Send + Sync {
    /// Create a list, optionally seeded with items. Fails on a blank or
    /// duplicate name, or if any seed item would be rejected by `add_item`.
    fn create_list(&self, name: &str, items: Vec<NewItem>) -> Result<ShoppingList, StoreError>;

    /// `{id, name}` of every list in storage order.
    fn list_summaries(&self) -> Result<Vec<ListSummary>, StoreError>;

    fn get_list(&self, list_id: &str) -> Result<ShoppingList, StoreError>;

    /// Delete a list together with all of its items. Returns what was removed.
    fn delete_list(&self, list_id: &str) -> Result<ShoppingList, StoreError>;

    /// Append a new, unbought item to the end of the list.
    fn add_item(&self, list_id: &str, item: NewItem) -> Result<Item, StoreError>;

    fn get_items(&self, list_id: &str) -> Result<Vec<Item>, StoreError>;

    /// Apply a partial update. The bought flag is never changed here and a
    /// rename is not checked for duplicates.
    fn update_item(
        &self,
        list_id: &str,
        item_id: &str,
        patch: &ItemPatch,
    ) -> Result<Item, StoreError>;

    fn delete_item(&self, list_id: &str, item_id: &str) -> Result<Item, StoreError>;

    /// Flip the bought flag and return the updated item.
    fn toggle_item(&self, list_id: &str, item_id: &str) -> Result<Item, StoreError>;

    /// Remove all bought items from a list. Returns the removed items.
    fn clear_bought(&self, list_id: &str) -> Result<Vec<Item>, StoreError>;
}

//! InMemoryListStore - Vec-backed list store living for the process lifetime.

use std::collections::HashSet;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use super::ListStore;
use crate::error::StoreError;
use crate::id::IdAllocator;
use crate::model::{is_blank, normalize_name, Item, ItemPatch, ListSummary, NewItem, ShoppingList};

/// In-memory list store.
///
/// Lists live in one `Vec` behind a single `RwLock`; every mutation holds the
/// write lock from validation through to the change, so checks such as
/// duplicate names cannot interleave with another writer. Ids are drawn only
/// after validation passes, so rejected requests never consume one.
/// Clone-friendly via Arc: clones share both the lists and the id sequences.
#[derive(Clone)]
pub struct InMemoryListStore {
    lists: Arc<RwLock<Vec<ShoppingList>>>,
    ids: Arc<IdAllocator>,
}

impl Default for InMemoryListStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryListStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            lists: Arc::new(RwLock::new(Vec::new())),
            ids: Arc::new(IdAllocator::new()),
        }
    }

    fn read(&self, operation: &'static str) -> Result<RwLockReadGuard<'_, Vec<ShoppingList>>, StoreError> {
        self.lists
            .read()
            .map_err(|_| StoreError::LockPoisoned(operation))
    }

    fn write(
        &self,
        operation: &'static str,
    ) -> Result<RwLockWriteGuard<'_, Vec<ShoppingList>>, StoreError> {
        self.lists
            .write()
            .map_err(|_| StoreError::LockPoisoned(operation))
    }
}

fn find_list<'a>(lists: &'a [ShoppingList], list_id: &str) -> Result<&'a ShoppingList, StoreError> {
    lists
        .iter()
        .find(|list| list.id == list_id)
        .ok_or_else(|| StoreError::ListNotFound(list_id.to_string()))
}

fn find_list_mut<'a>(
    lists: &'a mut [ShoppingList],
    list_id: &str,
) -> Result<&'a mut ShoppingList, StoreError> {
    lists
        .iter_mut()
        .find(|list| list.id == list_id)
        .ok_or_else(|| StoreError::ListNotFound(list_id.to_string()))
}

fn find_item_mut<'a>(list: &'a mut ShoppingList, item_id: &str) -> Result<&'a mut Item, StoreError> {
    let list_id = list.id.clone();
    list.item_mut(item_id).ok_or_else(|| StoreError::ItemNotFound {
        list_id,
        item_id: item_id.to_string(),
    })
}

fn require_item_name(item: &NewItem) -> Result<(), StoreError> {
    if is_blank(&item.name) {
        return Err(StoreError::InvalidInput("item name must not be empty".into()));
    }
    Ok(())
}

impl ListStore for InMemoryListStore {
    fn create_list(&self, name: &str, items: Vec<NewItem>) -> Result<ShoppingList, StoreError> {
        if is_blank(name) {
            return Err(StoreError::InvalidInput("list name must not be empty".into()));
        }
        let name = name.trim();

        let mut lists = self.write("create_list")?;
        if lists.iter().any(|list| list.is_named(name)) {
            return Err(StoreError::DuplicateName(name.to_string()));
        }

        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            require_item_name(item)?;
            if !seen.insert(normalize_name(&item.name)) {
                return Err(StoreError::DuplicateItem {
                    list: name.to_string(),
                    name: item.name.trim().to_string(),
                });
            }
        }

        let mut list = ShoppingList::new(self.ids.next_list_id(), name);
        list.items = items
            .into_iter()
            .map(|item| item.into_item(self.ids.next_item_id()))
            .collect();
        lists.push(list.clone());

        debug!(list_id = %list.id, name = %list.name, items = list.items.len(), "list created");
        Ok(list)
    }

    fn list_summaries(&self) -> Result<Vec<ListSummary>, StoreError> {
        let lists = self.read("list_summaries")?;
        Ok(lists.iter().map(ShoppingList::summary).collect())
    }

    fn get_list(&self, list_id: &str) -> Result<ShoppingList, StoreError> {
        let lists = self.read("get_list")?;
        find_list(&lists, list_id).cloned()
    }

    fn delete_list(&self, list_id: &str) -> Result<ShoppingList, StoreError> {
        let mut lists = self.write("delete_list")?;
        let index = lists
            .iter()
            .position(|list| list.id == list_id)
            .ok_or_else(|| StoreError::ListNotFound(list_id.to_string()))?;
        let removed = lists.remove(index);

        debug!(list_id, items = removed.items.len(), "list deleted");
        Ok(removed)
    }

    fn add_item(&self, list_id: &str, item: NewItem) -> Result<Item, StoreError> {
        let mut lists = self.write("add_item")?;
        let list = find_list_mut(&mut lists, list_id)?;

        require_item_name(&item)?;
        if list.has_item_named(&item.name) {
            return Err(StoreError::DuplicateItem {
                list: list_id.to_string(),
                name: item.name.trim().to_string(),
            });
        }

        let item = item.into_item(self.ids.next_item_id());
        list.items.push(item.clone());

        debug!(list_id, item_id = %item.id, name = %item.name, "item added");
        Ok(item)
    }

    fn get_items(&self, list_id: &str) -> Result<Vec<Item>, StoreError> {
        let lists = self.read("get_items")?;
        Ok(find_list(&lists, list_id)?.items.clone())
    }

    fn update_item(
        &self,
        list_id: &str,
        item_id: &str,
        patch: &ItemPatch,
    ) -> Result<Item, StoreError> {
        let mut lists = self.write("update_item")?;
        let item = find_item_mut(find_list_mut(&mut lists, list_id)?, item_id)?;
        patch.apply_to(item);

        debug!(list_id, item_id, "item updated");
        Ok(item.clone())
    }

    fn delete_item(&self, list_id: &str, item_id: &str) -> Result<Item, StoreError> {
        let mut lists = self.write("delete_item")?;
        let list = find_list_mut(&mut lists, list_id)?;
        let removed = list
            .remove_item(item_id)
            .ok_or_else(|| StoreError::ItemNotFound {
                list_id: list_id.to_string(),
                item_id: item_id.to_string(),
            })?;

        debug!(list_id, item_id, "item deleted");
        Ok(removed)
    }

    fn toggle_item(&self, list_id: &str, item_id: &str) -> Result<Item, StoreError> {
        let mut lists = self.write("toggle_item")?;
        let item = find_item_mut(find_list_mut(&mut lists, list_id)?, item_id)?;
        let bought = item.toggle();

        debug!(list_id, item_id, bought, "item toggled");
        Ok(item.clone())
    }

    fn clear_bought(&self, list_id: &str) -> Result<Vec<Item>, StoreError> {
        let mut lists = self.write("clear_bought")?;
        let removed = find_list_mut(&mut lists, list_id)?.remove_bought();

        debug!(list_id, removed = removed.len(), "bought items cleared");
        Ok(removed)
    }
}

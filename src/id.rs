//! Identity allocation for lists and items.

use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out process-unique ids from two independent sequences.
///
/// List ids and item ids each start at 1 and only ever grow, so an id is
/// never handed out twice even after the entity that carried it is deleted.
/// Item ids are shared across every list.
#[derive(Debug)]
pub struct IdAllocator {
    next_list: AtomicU64,
    next_item: AtomicU64,
}

impl IdAllocator {
    pub fn new() -> Self {
        IdAllocator {
            next_list: AtomicU64::new(1),
            next_item: AtomicU64::new(1),
        }
    }

    /// Allocate the next list id.
    pub fn next_list_id(&self) -> String {
        self.next_list.fetch_add(1, Ordering::Relaxed).to_string()
    }

    /// Allocate the next item id.
    pub fn next_item_id(&self) -> String {
        self.next_item.fetch_add(1, Ordering::Relaxed).to_string()
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

//! Command handlers for the shopping list service.
//!
//! Each handler lives in its own module and exports:
//! - `COMMAND: &str` — the command name
//! - `STATUS: u16` — the status answered on success
//! - `guard(ctx) -> bool` — input shape validation
//! - `handle(ctx) -> Result<Value, HandlerError>` — the handler
//!
//! Handlers are generic over the [`ListStore`] so tests can swap stores.

pub mod item_add;
pub mod item_delete;
pub mod item_list;
pub mod item_toggle;
pub mod item_update;
pub mod list_clear_bought;
pub mod list_create;
pub mod list_delete;
pub mod list_get;
pub mod list_summaries;

use crate::microsvc::Service;
use crate::store::ListStore;

/// Build a service with every shopping list command registered.
pub fn service<S: ListStore + 'static>(store: S) -> Service<S> {
    crate::register_handlers!(
        Service::new(store),
        list_create,
        list_summaries,
        list_get,
        list_delete,
        list_clear_bought,
        item_list,
        item_add,
        item_update,
        item_delete,
        item_toggle,
    )
}

mod error;
mod id;

pub mod config;
pub mod handlers;
pub mod microsvc;
pub mod model;
#[cfg(feature = "http")]
pub mod routes;
pub mod store;

pub use config::ServerConfig;
pub use error::StoreError;
pub use id::IdAllocator;
pub use model::{normalize_name, Item, ItemPatch, ListSummary, NewItem, ShoppingList};
pub use store::{InMemoryListStore, ListStore};

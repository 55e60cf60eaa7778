use std::fmt;

/// Errors raised by list store operations.
///
/// Every variant is detected before the store is touched, so a failed
/// operation leaves the store exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A required field is missing or blank.
    InvalidInput(String),
    /// Another list already uses this name (trimmed, case-insensitive).
    DuplicateName(String),
    /// The list already holds an item with this name (trimmed, case-insensitive).
    /// `list` is the list id, or the list name while the list is still being created.
    DuplicateItem { list: String, name: String },
    ListNotFound(String),
    ItemNotFound { list_id: String, item_id: String },
    LockPoisoned(&'static str),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::InvalidInput(message) => write!(f, "invalid input: {}", message),
            StoreError::DuplicateName(name) => {
                write!(f, "list with name {:?} already exists", name)
            }
            StoreError::DuplicateItem { list, name } => write!(
                f,
                "item with name {:?} already exists in list {}",
                name, list
            ),
            StoreError::ListNotFound(id) => write!(f, "list not found: {}", id),
            StoreError::ItemNotFound { list_id, item_id } => {
                write!(f, "item not found: {} in list {}", item_id, list_id)
            }
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StoreError {}

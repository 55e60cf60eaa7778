//! Context passed to command handlers.
//!
//! Carries the parsed input and a reference to the list store. Handlers
//! access everything they need through the context.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::HandlerError;

/// The context passed to every command handler.
///
/// Generic over `S` (the store type) so handlers work against any
/// [`ListStore`](crate::ListStore) implementation.
///
/// ## Example
///
/// ```ignore
/// pub fn handle<S: ListStore>(ctx: &Context<S>) -> Result<Value, HandlerError> {
///     let input = ctx.input::<Input>()?;
///     let item = ctx.store().toggle_item(&input.list_id, &input.item_id)?;
///     Ok(json!({ "item": item }))
/// }
/// ```
pub struct Context<'a, S> {
    /// The command name being handled.
    command_name: String,
    /// Raw JSON input: path parameters merged over the request body.
    input: Value,
    store: &'a S,
}

impl<'a, S> Context<'a, S> {
    pub(crate) fn new(command_name: String, input: Value, store: &'a S) -> Self {
        Self {
            command_name,
            input,
            store,
        }
    }

    /// Deserialize the input payload into a typed struct.
    pub fn input<T: DeserializeOwned>(&self) -> Result<T, HandlerError> {
        serde_json::from_value(self.input.clone())
            .map_err(|e| HandlerError::DecodeFailed(e.to_string()))
    }

    /// Get the raw JSON input.
    pub fn raw_input(&self) -> &Value {
        &self.input
    }

    pub fn command_name(&self) -> &str {
        &self.command_name
    }

    pub fn store(&self) -> &S {
        self.store
    }

    /// Check if the raw input contains a field.
    pub fn has_field(&self, field: &str) -> bool {
        self.input.get(field).is_some()
    }

    /// Check if the raw input contains all specified fields.
    pub fn has_fields(&self, fields: &[&str]) -> bool {
        fields.iter().all(|f| self.has_field(f))
    }

    /// Check that a field is present and holds a string.
    pub fn has_string(&self, field: &str) -> bool {
        self.input.get(field).map_or(false, Value::is_string)
    }
}

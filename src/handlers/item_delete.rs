//! Handler: item.delete

use serde::Deserialize;
use serde_json::{json, Value};

use crate::microsvc::{Context, HandlerError};
use crate::store::ListStore;

pub const COMMAND: &str = "item.delete";
pub const STATUS: u16 = 200;

#[derive(Deserialize)]
pub struct Input {
    pub list_id: String,
    pub item_id: String,
}

pub fn guard<S>(ctx: &Context<S>) -> bool {
    ctx.has_string("list_id") && ctx.has_string("item_id")
}

pub fn handle<S: ListStore>(ctx: &Context<S>) -> Result<Value, HandlerError> {
    let input = ctx.input::<Input>()?;
    ctx.store().delete_item(&input.list_id, &input.item_id)?;

    Ok(json!({ "message": "Item deleted successfully" }))
}

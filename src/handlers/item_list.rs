//! Handler: item.list

use serde::Deserialize;
use serde_json::{json, Value};

use crate::microsvc::{Context, HandlerError};
use crate::store::ListStore;

pub const COMMAND: &str = "item.list";
pub const STATUS: u16 = 200;

#[derive(Deserialize)]
pub struct Input {
    pub list_id: String,
}

pub fn guard<S>(ctx: &Context<S>) -> bool {
    ctx.has_string("list_id")
}

pub fn handle<S: ListStore>(ctx: &Context<S>) -> Result<Value, HandlerError> {
    let input = ctx.input::<Input>()?;
    let items = ctx.store().get_items(&input.list_id)?;

    Ok(json!({
        "message": "Items retrieved successfully",
        "items": items,
    }))
}

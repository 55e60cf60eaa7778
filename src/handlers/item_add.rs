//! Handler: item.add
//!
//! The item name is not part of the guard: a missing list must still
//! answer 404 before the payload is judged.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::microsvc::{Context, HandlerError};
use crate::model::NewItem;
use crate::store::ListStore;

pub const COMMAND: &str = "item.add";
pub const STATUS: u16 = 201;

#[derive(Deserialize)]
pub struct Input {
    pub list_id: String,
    #[serde(flatten)]
    pub item: NewItem,
}

pub fn guard<S>(ctx: &Context<S>) -> bool {
    ctx.has_string("list_id")
}

pub fn handle<S: ListStore>(ctx: &Context<S>) -> Result<Value, HandlerError> {
    let input = ctx.input::<Input>()?;
    let item = ctx.store().add_item(&input.list_id, input.item)?;

    Ok(json!({
        "message": "Item added successfully",
        "item": item,
    }))
}

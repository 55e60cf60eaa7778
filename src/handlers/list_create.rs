//! Handler: list.create
//!
//! Creates a list, optionally seeded with items.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::microsvc::{Context, HandlerError};
use crate::model::NewItem;
use crate::store::ListStore;

pub const COMMAND: &str = "list.create";
pub const STATUS: u16 = 201;

#[derive(Deserialize)]
pub struct Input {
    pub name: String,
    #[serde(default)]
    pub items: Vec<NewItem>,
}

pub fn guard<S>(ctx: &Context<S>) -> bool {
    ctx.has_string("name")
}

pub fn handle<S: ListStore>(ctx: &Context<S>) -> Result<Value, HandlerError> {
    let input = ctx.input::<Input>()?;
    let list = ctx.store().create_list(&input.name, input.items)?;

    Ok(json!({
        "message": "List created successfully",
        "list": list,
    }))
}

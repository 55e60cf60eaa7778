//! Handler: list.get
//!
//! Answers with the list itself (`id`, `name`, `items`) rather than a
//! wrapped message, which is the shape list detail pages read.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::microsvc::{Context, HandlerError};
use crate::store::ListStore;

pub const COMMAND: &str = "list.get";
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
    let list = ctx.store().get_list(&input.list_id)?;
    Ok(json!(list))
}

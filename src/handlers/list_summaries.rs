//! Handler: list.summaries

use serde_json::{json, Value};

use crate::microsvc::{Context, HandlerError};
use crate::store::ListStore;

pub const COMMAND: &str = "list.summaries";
pub const STATUS: u16 = 200;

pub fn guard<S>(_ctx: &Context<S>) -> bool {
    true
}

pub fn handle<S: ListStore>(ctx: &Context<S>) -> Result<Value, HandlerError> {
    let lists = ctx.store().list_summaries()?;

    Ok(json!({
        "message": "Lists retrieved successfully",
        "lists": lists,
    }))
}

//! microsvc — Convention-based command handler framework.
//!
//! Every store operation is exposed as a named command registered on a
//! `Service`. Each handler receives a `Context<S>` with access to the input
//! payload and the list store. Transports (HTTP, direct calls in tests) only
//! translate requests into `dispatch` calls.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use shopping_lists::{handlers, microsvc, InMemoryListStore};
//! use serde_json::json;
//!
//! let service = Arc::new(handlers::service(InMemoryListStore::new()));
//!
//! // Direct dispatch
//! let created = service.dispatch("list.create", json!({ "name": "Weekly" }))?;
//!
//! // HTTP transport (requires "http" feature)
//! // microsvc::serve(routes::app(service, &config), &config.bind, shutdown).await?;
//! ```
//!
//! ## Handler Convention
//!
//! ```ignore
//! // src/handlers/item_toggle.rs
//!
//! pub const COMMAND: &str = "item.toggle";
//! pub const STATUS: u16 = 200;
//!
//! pub fn guard<S>(ctx: &Context<S>) -> bool {
//!     ctx.has_string("list_id") && ctx.has_string("item_id")
//! }
//!
//! pub fn handle<S: ListStore>(ctx: &Context<S>) -> Result<Value, HandlerError> {
//!     let input = ctx.input::<Input>()?;
//!     let item = ctx.store().toggle_item(&input.list_id, &input.item_id)?;
//!     Ok(json!({ "message": "Item toggled successfully", "item": item }))
//! }
//! ```

mod context;
mod error;
mod service;

pub use context::Context;
pub use error::HandlerError;
pub use service::{CommandRequest, CommandResponse, Service};

// HTTP transport (requires "http" feature)
#[cfg(feature = "http")]
mod http;
#[cfg(feature = "http")]
pub use http::{body_input, cors_layer, dispatch_response, health, path_input, serve};

/// Register handler modules with a service using the convention pattern.
///
/// Each handler module must export:
/// - `COMMAND: &str` — the command name
/// - `STATUS: u16` — the success status
/// - `guard(ctx) -> bool` — input validation
/// - `handle(ctx) -> Result<Value, HandlerError>` — the handler
///
/// # Example
/// ```ignore
/// let service = shopping_lists::register_handlers!(
///     microsvc::Service::new(InMemoryListStore::new()),
///     handlers::list_create,
///     handlers::item_add,
/// );
/// ```
#[macro_export]
macro_rules! register_handlers {
    ($service:expr, $( $($seg:ident)::+ ),+ $(,)?) => {
        $service
        $(
            .register(
                $($seg)::+::COMMAND,
                $($seg)::+::STATUS,
                $($seg)::+::guard,
                $($seg)::+::handle,
            )
        )+
    };
}

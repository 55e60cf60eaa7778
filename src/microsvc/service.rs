//! Service — command handler registry and dispatch for microsvc.
//!
//! `Service<S>` holds a list store and a set of named command handlers.
//! Each handler receives a `Context<S>` and returns `Result<Value, HandlerError>`.
//!
//! ## Example
//!
//! ```ignore
//! use shopping_lists::microsvc::Service;
//! use shopping_lists::InMemoryListStore;
//! use serde_json::json;
//!
//! let service = Service::new(InMemoryListStore::new())
//!     .command("list.count", |ctx| {
//!         Ok(json!({ "count": ctx.store().list_summaries()?.len() }))
//!     });
//!
//! let result = service.dispatch("list.count", json!({}));
//! ```

use std::collections::HashMap;

use serde_json::Value;

use super::context::Context;
use super::error::HandlerError;

type Guard<S> = Box<dyn Fn(&Context<S>) -> bool + Send + Sync>;
type Handle<S> = Box<dyn Fn(&Context<S>) -> Result<Value, HandlerError> + Send + Sync>;

/// A registered command handler with optional guard.
struct CommandHandler<S> {
    /// Status reported by `dispatch_request` on success.
    status: u16,
    guard: Option<Guard<S>>,
    handle: Handle<S>,
}

/// A microservice that routes commands to handler functions.
///
/// Generic over `S`, the store type. Handlers receive a `Context<S>`
/// and can access the store via `ctx.store()`.
pub struct Service<S> {
    store: S,
    handlers: HashMap<String, CommandHandler<S>>,
}

impl<S: Send + Sync + 'static> Service<S> {
    /// Create a new service with the given store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            handlers: HashMap::new(),
        }
    }

    /// Register a command handler answering with status 200.
    ///
    /// Uses builder pattern — returns `self` for chaining.
    pub fn command<F>(mut self, name: &str, handler: F) -> Self
    where
        F: Fn(&Context<S>) -> Result<Value, HandlerError> + Send + Sync + 'static,
    {
        self.handlers.insert(
            name.to_string(),
            CommandHandler {
                status: 200,
                guard: None,
                handle: Box::new(handler),
            },
        );
        self
    }

    /// Register a command handler with a guard function.
    ///
    /// The guard is called before the handler. If it returns `false`,
    /// the command is rejected with `HandlerError::GuardRejected`.
    pub fn command_guarded<G, F>(self, name: &str, guard: G, handler: F) -> Self
    where
        G: Fn(&Context<S>) -> bool + Send + Sync + 'static,
        F: Fn(&Context<S>) -> Result<Value, HandlerError> + Send + Sync + 'static,
    {
        self.register(name, 200, guard, handler)
    }

    /// Register a guarded command handler with its success status.
    ///
    /// This is what `register_handlers!` calls for each handler module.
    pub fn register<G, F>(mut self, name: &str, status: u16, guard: G, handler: F) -> Self
    where
        G: Fn(&Context<S>) -> bool + Send + Sync + 'static,
        F: Fn(&Context<S>) -> Result<Value, HandlerError> + Send + Sync + 'static,
    {
        self.handlers.insert(
            name.to_string(),
            CommandHandler {
                status,
                guard: Some(Box::new(guard)),
                handle: Box::new(handler),
            },
        );
        self
    }

    /// Dispatch a command by name.
    ///
    /// Builds a `Context` from the input, looks up the handler,
    /// runs the guard (if any), then calls the handler.
    pub fn dispatch(&self, command: &str, input: Value) -> Result<Value, HandlerError> {
        let handler = self
            .handlers
            .get(command)
            .ok_or_else(|| HandlerError::UnknownCommand(command.to_string()))?;

        let ctx = Context::new(command.to_string(), input, &self.store);

        if let Some(guard) = &handler.guard {
            if !guard(&ctx) {
                return Err(HandlerError::GuardRejected(command.to_string()));
            }
        }

        (handler.handle)(&ctx)
    }

    /// Dispatch a `CommandRequest`, returning a `CommandResponse`.
    pub fn dispatch_request(&self, request: &CommandRequest) -> CommandResponse {
        match self.dispatch(&request.command, request.input.clone()) {
            Ok(value) => CommandResponse {
                status: self.success_status(&request.command),
                body: value,
            },
            Err(e) => CommandResponse::from_error(&e),
        }
    }

    fn success_status(&self, command: &str) -> u16 {
        self.handlers
            .get(command)
            .map(|handler| handler.status)
            .unwrap_or(200)
    }

    /// List registered command names, sorted.
    pub fn commands(&self) -> Vec<&str> {
        let mut commands: Vec<&str> = self.handlers.keys().map(|s| s.as_str()).collect();
        commands.sort_unstable();
        commands
    }

    /// Get a reference to the store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

/// An inbound command request.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CommandRequest {
    /// Command name (e.g. `item.toggle`).
    pub command: String,
    /// JSON input payload.
    #[serde(default)]
    pub input: Value,
}

impl CommandRequest {
    pub fn new(command: impl Into<String>, input: Value) -> Self {
        Self {
            command: command.into(),
            input,
        }
    }
}

/// Response from dispatching a command.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CommandResponse {
    /// HTTP-style status code.
    pub status: u16,
    /// Response body (handler result or error).
    pub body: Value,
}

impl CommandResponse {
    /// Build an error response: the mapped status and `{ "error": message }`.
    pub fn from_error(err: &HandlerError) -> Self {
        Self {
            status: err.status_code(),
            body: serde_json::json!({ "error": err.to_string() }),
        }
    }
}

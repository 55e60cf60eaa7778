//! REST routes for the shopping list API.
//!
//! Each route pulls its path parameters and body into a command input and
//! dispatches it; status codes come from the handler (`STATUS`) or the error.
//!
//! | Method | Path | Command |
//! |---|---|---|
//! | GET | /health | — |
//! | POST | /list, /lists | `list.create` |
//! | GET | /lists | `list.summaries` |
//! | GET | /lists/:list_id | `list.get` |
//! | DELETE | /lists/:list_id | `list.delete` |
//! | DELETE | /lists/:list_id/bought | `list.clear_bought` |
//! | GET | /lists/:list_id/items | `item.list` |
//! | POST | /lists/:list_id/items | `item.add` |
//! | PUT | /lists/:list_id/items/:item_id | `item.update` |
//! | DELETE | /lists/:list_id/items/:item_id | `item.delete` |
//! | PATCH | /lists/:list_id/items/:item_id/toggle | `item.toggle` |

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::routing::{delete, get, patch, post, put};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::handlers::{
    item_add, item_delete, item_list, item_toggle, item_update, list_clear_bought, list_create,
    list_delete, list_get, list_summaries,
};
use crate::microsvc::{body_input, cors_layer, dispatch_response, health, path_input, Service};
use crate::store::ListStore;

type Shared<S> = State<Arc<Service<S>>>;

/// Build the REST `Router` over a service with the shopping list handlers
/// registered (see [`crate::handlers::service`]).
pub fn router<S: ListStore + 'static>(service: Arc<Service<S>>) -> Router {
    Router::new()
        .route("/health", get(health::<S>))
        .route("/list", post(create_list::<S>))
        .route("/lists", get(summaries::<S>).post(create_list::<S>))
        .route("/lists/:list_id", get(get_list::<S>).delete(delete_list::<S>))
        .route("/lists/:list_id/bought", delete(clear_bought::<S>))
        .route("/lists/:list_id/items", get(get_items::<S>).post(add_item::<S>))
        .route(
            "/lists/:list_id/items/:item_id",
            put(update_item::<S>).delete(delete_item::<S>),
        )
        .route("/lists/:list_id/items/:item_id/toggle", patch(toggle_item::<S>))
        .with_state(service)
}

/// The router with request tracing and CORS applied, ready to serve.
pub fn app<S: ListStore + 'static>(service: Arc<Service<S>>, config: &ServerConfig) -> Router {
    router(service)
        .layer(cors_layer(&config.cors_origins))
        .layer(TraceLayer::new_for_http())
}

async fn create_list<S: ListStore + 'static>(State(service): Shared<S>, body: Bytes) -> Response {
    dispatch_response(&service, list_create::COMMAND, body_input(&body, &[]))
}

async fn summaries<S: ListStore + 'static>(State(service): Shared<S>) -> Response {
    dispatch_response(&service, list_summaries::COMMAND, Ok(path_input(&[])))
}

async fn get_list<S: ListStore + 'static>(
    State(service): Shared<S>,
    Path(list_id): Path<String>,
) -> Response {
    let input = path_input(&[("list_id", &list_id)]);
    dispatch_response(&service, list_get::COMMAND, Ok(input))
}

async fn delete_list<S: ListStore + 'static>(
    State(service): Shared<S>,
    Path(list_id): Path<String>,
) -> Response {
    let input = path_input(&[("list_id", &list_id)]);
    dispatch_response(&service, list_delete::COMMAND, Ok(input))
}

async fn clear_bought<S: ListStore + 'static>(
    State(service): Shared<S>,
    Path(list_id): Path<String>,
) -> Response {
    let input = path_input(&[("list_id", &list_id)]);
    dispatch_response(&service, list_clear_bought::COMMAND, Ok(input))
}

async fn get_items<S: ListStore + 'static>(
    State(service): Shared<S>,
    Path(list_id): Path<String>,
) -> Response {
    let input = path_input(&[("list_id", &list_id)]);
    dispatch_response(&service, item_list::COMMAND, Ok(input))
}

async fn add_item<S: ListStore + 'static>(
    State(service): Shared<S>,
    Path(list_id): Path<String>,
    body: Bytes,
) -> Response {
    let input = body_input(&body, &[("list_id", &list_id)]);
    dispatch_response(&service, item_add::COMMAND, input)
}

async fn update_item<S: ListStore + 'static>(
    State(service): Shared<S>,
    Path((list_id, item_id)): Path<(String, String)>,
    body: Bytes,
) -> Response {
    let input = body_input(&body, &[("list_id", &list_id), ("item_id", &item_id)]);
    dispatch_response(&service, item_update::COMMAND, input)
}

async fn delete_item<S: ListStore + 'static>(
    State(service): Shared<S>,
    Path((list_id, item_id)): Path<(String, String)>,
) -> Response {
    let input = path_input(&[("list_id", &list_id), ("item_id", &item_id)]);
    dispatch_response(&service, item_delete::COMMAND, Ok(input))
}

async fn toggle_item<S: ListStore + 'static>(
    State(service): Shared<S>,
    Path((list_id, item_id)): Path<(String, String)>,
) -> Response {
    let input = path_input(&[("list_id", &list_id), ("item_id", &item_id)]);
    dispatch_response(&service, item_toggle::COMMAND, Ok(input))
}

//! HTTP transport for microsvc — maps HTTP requests to command dispatch.
//!
//! Requires the `http` feature. Uses axum for routing and tower-http for
//! CORS. The REST route table lives in [`crate::routes`]; this module holds
//! the pieces every route shares:
//!
//! - building a command input from path parameters and the request body,
//! - turning a dispatch result into an HTTP response,
//! - `GET /health`,
//! - the CORS layer and `serve`.

use std::future::Future;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::{json, Map, Value};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tracing::{info, warn};

use super::error::HandlerError;
use super::service::{CommandRequest, CommandResponse, Service};

/// Command input for routes without a body: just the path parameters.
pub fn path_input(params: &[(&str, &str)]) -> Value {
    let mut input = Map::new();
    merge_params(&mut input, params);
    Value::Object(input)
}

/// Command input for routes with a JSON body.
///
/// The body must be a JSON object. Path parameters are merged over it, so a
/// `list_id` in the URL always wins over one in the body.
pub fn body_input(body: &[u8], params: &[(&str, &str)]) -> Result<Value, HandlerError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(HandlerError::DecodeFailed("missing request body".into()));
    }
    let mut input = match serde_json::from_slice::<Value>(body)? {
        Value::Object(map) => map,
        _ => {
            return Err(HandlerError::DecodeFailed(
                "request body must be a JSON object".into(),
            ))
        }
    };
    merge_params(&mut input, params);
    Ok(Value::Object(input))
}

fn merge_params(input: &mut Map<String, Value>, params: &[(&str, &str)]) {
    for (name, value) in params {
        input.insert((*name).to_string(), Value::String((*value).to_string()));
    }
}

/// Dispatch `command` and render the outcome as an HTTP response.
pub fn dispatch_response<S: Send + Sync + 'static>(
    service: &Service<S>,
    command: &str,
    input: Result<Value, HandlerError>,
) -> Response {
    let response = match input {
        Ok(input) => service.dispatch_request(&CommandRequest::new(command, input)),
        Err(e) => CommandResponse::from_error(&e),
    };

    if response.status >= 500 {
        warn!(command, status = response.status, body = %response.body, "command failed");
    }

    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(response.body)).into_response()
}

/// `GET /health` — returns `{ "ok": true, "commands": [...] }`.
pub async fn health<S: Send + Sync + 'static>(
    State(service): State<Arc<Service<S>>>,
) -> impl IntoResponse {
    let commands: Vec<&str> = service.commands();
    Json(json!({ "ok": true, "commands": commands }))
}

/// CORS for browser clients.
///
/// Credentials are allowed, so origins must be listed explicitly; a `*`
/// entry or a value that is not a valid header is skipped with a warning.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            if origin == "*" {
                warn!("ignoring wildcard CORS origin, credentials require explicit origins");
                return None;
            }
            match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin = %origin, "ignoring invalid CORS origin");
                    None
                }
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Serve `app` at the given address (e.g. `"0.0.0.0:8080"`) until `shutdown`
/// resolves.
pub async fn serve<F>(app: Router, addr: &str, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "shopping list API listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("shopping list API stopped");
    Ok(())
}

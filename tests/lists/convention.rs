//! Tests for the handler module convention.
//!
//! Each handler module exports `COMMAND`, `STATUS`, `guard` and `handle`, and
//! `register_handlers!` wires any subset of them onto a service.

use serde_json::json;
use shopping_lists::handlers;
use shopping_lists::microsvc::{CommandRequest, HandlerError, Service};
use shopping_lists::InMemoryListStore;

#[test]
fn register_subset_of_handlers() {
    let service = shopping_lists::register_handlers!(
        Service::new(InMemoryListStore::new()),
        handlers::list_create,
        handlers::item_add,
    );

    assert_eq!(service.commands(), vec!["item.add", "list.create"]);

    let created = service
        .dispatch("list.create", json!({ "name": "Weekly" }))
        .unwrap();
    let list_id = created["list"]["id"].clone();
    let added = service
        .dispatch("item.add", json!({ "list_id": list_id, "name": "Bread" }))
        .unwrap();
    assert_eq!(added["item"]["name"], "Bread");

    // Not registered on this service.
    let err = service
        .dispatch("item.toggle", json!({ "list_id": list_id, "item_id": "1" }))
        .unwrap_err();
    assert!(matches!(err, HandlerError::UnknownCommand(_)));
}

#[test]
fn handler_constants() {
    assert_eq!(handlers::list_create::COMMAND, "list.create");
    assert_eq!(handlers::list_create::STATUS, 201);
    assert_eq!(handlers::item_add::STATUS, 201);
    assert_eq!(handlers::item_toggle::COMMAND, "item.toggle");
    assert_eq!(handlers::item_toggle::STATUS, 200);
}

#[test]
fn guards_reject_before_the_store_is_touched() {
    let service = handlers::service(InMemoryListStore::new());

    let cases = [
        ("list.create", json!({ "name": 5 })),
        ("list.get", json!({})),
        ("item.list", json!({ "list_id": 1 })),
        ("item.update", json!({ "list_id": "1" })),
        ("item.delete", json!({ "item_id": "1" })),
        ("item.toggle", json!({})),
        ("list.clear_bought", json!({})),
    ];
    for (command, input) in cases {
        let err = service.dispatch(command, input).unwrap_err();
        assert!(
            matches!(err, HandlerError::GuardRejected(ref name) if name == command),
            "{command}: {err}"
        );
        assert_eq!(err.status_code(), 400);
    }
}

#[test]
fn registered_status_is_used_on_success() {
    let service = handlers::service(InMemoryListStore::new());

    let resp = service.dispatch_request(&CommandRequest::new(
        handlers::list_create::COMMAND,
        json!({ "name": "Weekly" }),
    ));
    assert_eq!(resp.status, handlers::list_create::STATUS);

    let resp = service.dispatch_request(&CommandRequest::new(
        handlers::list_get::COMMAND,
        json!({ "list_id": "1" }),
    ));
    assert_eq!(resp.status, handlers::list_get::STATUS);
    assert_eq!(resp.body["name"], "Weekly");
}

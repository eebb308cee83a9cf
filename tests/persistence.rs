use leptos::logging::log;
use sharehub::config::{StoreConfig, STORE_KEY};
use sharehub::storage::MemorySlot;
use sharehub::store::{Envelope, Store, StoreState};

fn open_on(slot: &MemorySlot) -> Store {
    Store::open(StoreConfig::default(), Box::new(slot.clone()))
}

#[test]
fn test_reopened_store_sees_previous_state() {
    log!("[TEST] Starting test_reopened_store_sees_previous_state");
    let slot = MemorySlot::new();
    let mut store = open_on(&slot);
    let user = store.register("Mia", "mia@example.com", "pw").unwrap();
    store.place_bid("2", 400.0).unwrap();
    store.delete_item("3");
    let before = store.snapshot();
    drop(store);

    let reopened = open_on(&slot);
    assert_eq!(reopened.snapshot(), before);
    assert_eq!(reopened.current_user().map(|u| u.id.clone()), Some(user.id));
    assert_eq!(reopened.item("2").unwrap().current_bid, Some(400.0));
    assert!(reopened.item("3").is_none());
}

#[test]
fn test_every_mutation_overwrites_the_slot() {
    let slot = MemorySlot::new();
    let mut store = open_on(&slot);
    assert_eq!(slot.get(STORE_KEY), None);

    store.login("john@example.com", "password123").unwrap();
    let after_login = slot.get(STORE_KEY).unwrap();

    store.send_message("2", "3", "hi").unwrap();
    let after_message = slot.get(STORE_KEY).unwrap();
    assert_ne!(after_login, after_message);

    let envelope: Envelope<StoreState> = serde_json::from_str(&after_message).unwrap();
    assert_eq!(envelope.version, 0);
    assert_eq!(envelope.state.messages.len(), 1);
    assert_eq!(
        envelope.state.current_user.map(|u| u.email),
        Some("john@example.com".to_string())
    );
}

#[test]
fn test_persisted_layout_matches_browser_slot_format() {
    let slot = MemorySlot::new();
    let mut store = open_on(&slot);
    store.login("jane@example.com", "password123").unwrap();

    let raw = slot.get(STORE_KEY).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let state = &json["state"];
    assert_eq!(state["currentUser"]["id"], "2");
    assert_eq!(state["items"][0]["type"], "rent");
    assert_eq!(state["items"][0]["status"], "available");
    assert_eq!(state["items"][0]["originalPrice"], 89.0);
    assert!(state["messages"].as_array().unwrap().is_empty());
    assert!(state["reviews"].as_array().unwrap().is_empty());
}

#[test]
fn test_logout_is_persisted() {
    let slot = MemorySlot::new();
    let mut store = open_on(&slot);
    store.login("jane@example.com", "password123").unwrap();
    store.logout();

    let reopened = open_on(&slot);
    assert!(reopened.current_user().is_none());
}

#[test]
fn test_custom_storage_key_is_isolated() {
    let slot = MemorySlot::new();
    let config = StoreConfig {
        storage_key: "other-profile".into(),
        ..StoreConfig::default()
    };
    let mut store = Store::open(config, Box::new(slot.clone()));
    store.login("john@example.com", "password123").unwrap();

    assert!(slot.get("other-profile").is_some());
    assert!(slot.get(STORE_KEY).is_none());
}

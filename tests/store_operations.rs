use leptos::logging::log;
use sharehub::config::StoreConfig;
use sharehub::errors::StoreError;
use sharehub::models::{ItemStatus, ListingType, NewItem};
use sharehub::store::Store;

// Helper: store seeded with the demo users (ids "1", "2") and items ("1".."3")
fn demo_store() -> Store {
    Store::in_memory(StoreConfig::default())
}

fn signed_in_as_jane() -> Store {
    let mut store = demo_store();
    store.login("jane@example.com", "password123").unwrap();
    store
}

fn bike_listing(bidding: bool) -> NewItem {
    NewItem {
        title: "Road Bike".into(),
        description: "Carbon frame".into(),
        category: "sports".into(),
        images: vec!["https://img/bike".into()],
        listing_type: ListingType::Sell,
        price: 500.0,
        is_bidding_enabled: bidding,
        ..NewItem::default()
    }
}

#[test]
fn test_login_requires_exact_match() {
    log!("[TEST] Starting test_login_requires_exact_match");
    let mut store = demo_store();
    let before = store.snapshot();

    assert_eq!(
        store.login("john@example.com", "wrong"),
        Err(StoreError::InvalidCredentials)
    );
    assert_eq!(
        store.login("JOHN@example.com", "password123"),
        Err(StoreError::InvalidCredentials)
    );
    assert_eq!(store.snapshot(), before);

    store.login("john@example.com", "password123").unwrap();
    assert_eq!(store.current_user().map(|u| u.id.as_str()), Some("1"));
}

#[test]
fn test_register_rejects_duplicate_email() {
    let mut store = demo_store();
    let users_before = store.users().len();

    assert_eq!(
        store.register("Johnny", "john@example.com", "pw"),
        Err(StoreError::DuplicateEmail)
    );
    assert_eq!(store.users().len(), users_before);
    assert!(store.current_user().is_none());
}

#[test]
fn test_register_appends_user_and_signs_in() {
    let mut store = demo_store();
    let users_before = store.users().len();

    // email comparison is case-sensitive
    let user = store.register("John", "John@example.com", "secret").unwrap();
    assert_eq!(store.users().len(), users_before + 1);
    assert_eq!(store.current_user(), Some(&user));
    assert_eq!(user.rating, 0.0);
    assert!(user.reviews.is_empty());
    assert!(user.location.is_none());

    let other = store.register("Ann", "ann@example.com", "pw").unwrap();
    assert_ne!(user.id, other.id);
}

#[test]
fn test_logout_clears_session_only() {
    let mut store = signed_in_as_jane();
    let items = store.items().to_vec();
    store.logout();
    assert!(store.current_user().is_none());
    assert_eq!(store.items(), items.as_slice());
}

#[test]
fn test_add_item_requires_session() {
    let mut store = demo_store();
    assert_eq!(
        store.add_item(bike_listing(false)),
        Err(StoreError::NotSignedIn)
    );
    assert_eq!(store.items().len(), 3);
}

#[test]
fn test_add_item_sets_owner_and_status() {
    log!("[TEST] Starting test_add_item_sets_owner_and_status");
    let mut store = signed_in_as_jane();

    let item = store.add_item(bike_listing(false)).unwrap();
    assert_eq!(store.items().len(), 4);
    assert_eq!(store.items().last(), Some(&item));
    assert_eq!(item.user_id, "2");
    assert_eq!(item.status, ItemStatus::Available);
    assert_eq!(item.title, "Road Bike");
    assert!(item.highest_bidder_id.is_none());
    assert_eq!(store.items_by_owner("2").count(), 2);
}

#[test]
fn test_bid_above_current_is_accepted() {
    let mut store = signed_in_as_jane();

    store.place_bid("2", 350.0).unwrap();
    let bike = store.item("2").unwrap();
    assert_eq!(bike.current_bid, Some(350.0));
    assert_eq!(bike.highest_bidder_id.as_deref(), Some("2"));
}

#[test]
fn test_bid_at_or_below_current_is_rejected() {
    let mut store = signed_in_as_jane();
    let before = store.item("2").cloned();

    assert_eq!(
        store.place_bid("2", 300.0),
        Err(StoreError::BidTooLow { current: 320.0 })
    );
    assert_eq!(
        store.place_bid("2", 320.0),
        Err(StoreError::BidTooLow { current: 320.0 })
    );
    assert_eq!(store.item("2").cloned(), before);
}

#[test]
fn test_bid_rejections_leave_items_untouched() {
    let mut store = demo_store();
    assert_eq!(store.place_bid("2", 999.0), Err(StoreError::NotSignedIn));

    store.login("jane@example.com", "password123").unwrap();
    let items = store.items().to_vec();
    assert_eq!(
        store.place_bid("1", 999.0),
        Err(StoreError::BiddingDisabled("1".into()))
    );
    assert_eq!(
        store.place_bid("missing", 999.0),
        Err(StoreError::ItemNotFound("missing".into()))
    );
    assert_eq!(store.place_bid("2", f64::NAN), Err(StoreError::InvalidAmount));
    assert_eq!(store.items(), items.as_slice());
}

#[test]
fn test_first_bid_on_fresh_listing_is_accepted() {
    let mut store = signed_in_as_jane();
    let item = store.add_item(bike_listing(true)).unwrap();
    assert_eq!(item.current_bid, None);

    store.place_bid(&item.id, 10.0).unwrap();
    assert_eq!(store.item(&item.id).unwrap().current_bid, Some(10.0));
}

#[test]
fn test_reviews_average_into_rating() {
    log!("[TEST] Starting test_reviews_average_into_rating");
    let mut store = demo_store();
    let target = store.register("Target", "target@example.com", "pw").unwrap();
    store.logout();
    store.login("john@example.com", "password123").unwrap();

    store.add_review(&target.id, 5.0, "great").unwrap();
    store.add_review(&target.id, 3.0, "ok").unwrap();

    let user = store.user(&target.id).unwrap();
    assert_eq!(user.rating, 4.0);
    assert_eq!(user.reviews.len(), 2);
    assert_eq!(store.reviews().len(), 2);
    assert!(store.reviews().iter().all(|r| r.from_user_id == "1"));
}

#[test]
fn test_first_review_replaces_seeded_rating() {
    let mut store = signed_in_as_jane();
    assert_eq!(store.user("1").unwrap().rating, 4.5);
    store.add_review("1", 2.0, "late return").unwrap();
    assert_eq!(store.user("1").unwrap().rating, 2.0);
}

#[test]
fn test_review_for_unknown_user_is_still_recorded() {
    let mut store = signed_in_as_jane();
    let users = store.users().to_vec();
    store.add_review("ghost", 4.0, "?").unwrap();
    assert_eq!(store.reviews().len(), 1);
    assert_eq!(store.users(), users.as_slice());
}

#[test]
fn test_review_requires_session() {
    let mut store = demo_store();
    assert_eq!(
        store.add_review("1", 5.0, "great"),
        Err(StoreError::NotSignedIn)
    );
    assert!(store.reviews().is_empty());
}

#[test]
fn test_delete_item_removes_exactly_one() {
    let mut store = demo_store();
    let removed = store.delete_item("2").unwrap();
    assert_eq!(removed.title, "Mountain Bike");
    let ids: Vec<&str> = store.items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);

    assert!(store.delete_item("2").is_none());
    assert_eq!(store.items().len(), 2);
}

#[test]
fn test_update_item_overwrites_in_place() {
    let mut store = demo_store();
    let mut mower = store.item("1").cloned().unwrap();
    mower.price = 40.0;
    mower.status = ItemStatus::Rented;

    assert!(store.update_item(mower.clone()));
    assert_eq!(store.items()[0], mower);

    mower.id = "nope".into();
    assert!(!store.update_item(mower));
    assert_eq!(store.items().len(), 3);
}

#[test]
fn test_messages_land_in_recipient_inbox() {
    let mut store = demo_store();
    assert_eq!(
        store.send_message("1", "1", "hello"),
        Err(StoreError::NotSignedIn)
    );

    store.login("jane@example.com", "password123").unwrap();
    let message = store.send_message("1", "1", "Is the mower free on Sunday?").unwrap();
    assert_eq!(message.from_user_id, "2");
    assert!(!message.read);
    assert_eq!(store.inbox("1").count(), 1);
    assert_eq!(store.unread_count("1"), 1);
    assert_eq!(store.unread_count("2"), 0);

    assert!(store.mark_message_read(&message.id));
    assert!(!store.mark_message_read(&message.id));
    assert_eq!(store.unread_count("1"), 0);
}

#[test]
fn test_empty_config_starts_without_demo_data() {
    let store = Store::in_memory(StoreConfig::empty());
    assert!(store.users().is_empty());
    assert!(store.items().is_empty());
}

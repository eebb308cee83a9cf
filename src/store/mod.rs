//! The marketplace state container.
//!
//! [`Store`] owns every user, listing, message and review plus the session
//! pointer. Its methods are the only way to change that state; each successful
//! mutation writes a full snapshot to the configured [`PersistSlot`].
mod context;
mod snapshot;

pub use context::{provide_store, use_store, StoreHandle};
pub use snapshot::{Envelope, StoreState, SNAPSHOT_VERSION};

use chrono::Utc;
use leptos::logging::{error, log, warn};
use uuid::Uuid;

use crate::config::StoreConfig;
use crate::errors::{PersistError, StoreError};
use crate::models::{review, Item, ItemStatus, Message, NewItem, Review, User};
use crate::storage::{MemorySlot, PersistSlot};

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn read_snapshot(config: &StoreConfig, slot: &dyn PersistSlot) -> Option<StoreState> {
    match slot.read(&config.storage_key) {
        Ok(Some(raw)) => match serde_json::from_str::<Envelope<StoreState>>(&raw) {
            Ok(envelope) => {
                log!(
                    "[STORE] Restored snapshot v{} from {}",
                    envelope.version,
                    config.storage_key
                );
                Some(envelope.state)
            }
            Err(e) => {
                warn!("[STORE] Ignoring undecodable snapshot: {}", e);
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            error!("[STORE] Failed to read slot {}: {}", config.storage_key, e);
            None
        }
    }
}

pub struct Store {
    config: StoreConfig,
    users: Vec<User>,
    items: Vec<Item>,
    messages: Vec<Message>,
    reviews: Vec<Review>,
    session: Option<String>, // id of the signed-in user
    slot: Box<dyn PersistSlot>,
}

impl Store {
    /// Rehydrate from `slot`, falling back to the seed state when the slot is
    /// empty or holds something that does not decode.
    pub fn open(config: StoreConfig, slot: Box<dyn PersistSlot>) -> Self {
        let state = read_snapshot(&config, slot.as_ref()).unwrap_or_else(|| {
            if config.seed_demo_data {
                log!("[STORE] Starting from demo data");
                StoreState::demo()
            } else {
                StoreState::default()
            }
        });

        let mut store = Store {
            config,
            users: vec![],
            items: vec![],
            messages: vec![],
            reviews: vec![],
            session: None,
            slot,
        };
        store.apply(state);
        store
    }

    /// Move to `slot` and take over whatever snapshot it holds. An empty or
    /// unreadable slot keeps the current state; the next mutation writes it there.
    pub fn rehydrate(&mut self, slot: Box<dyn PersistSlot>) {
        if let Some(state) = read_snapshot(&self.config, slot.as_ref()) {
            self.apply(state);
        }
        self.slot = slot;
    }

    fn apply(&mut self, state: StoreState) {
        self.session = state
            .current_user
            .map(|u| u.id)
            .filter(|id| state.users.iter().any(|u| &u.id == id));
        self.users = state.users;
        self.items = state.items;
        self.messages = state.messages;
        self.reviews = state.reviews;
    }

    /// A store backed by a fresh in-memory slot.
    pub fn in_memory(config: StoreConfig) -> Self {
        Self::open(config, Box::new(MemorySlot::new()))
    }

    fn persist(&mut self) {
        let envelope = Envelope {
            state: self.snapshot(),
            version: SNAPSHOT_VERSION,
        };
        let written = serde_json::to_string(&envelope)
            .map_err(PersistError::from)
            .and_then(|json| self.slot.write(&self.config.storage_key, &json));
        if let Err(e) = written {
            error!("[STORE] Failed to persist snapshot: {}", e);
        }
    }

    fn session_id(&self) -> Result<String, StoreError> {
        self.session.clone().ok_or(StoreError::NotSignedIn)
    }

    // Session

    pub fn login(&mut self, email: &str, password: &str) -> Result<(), StoreError> {
        let id = self
            .users
            .iter()
            .find(|u| u.matches_credentials(email, password))
            .map(|u| u.id.clone())
            .ok_or(StoreError::InvalidCredentials)?;
        log!("[STORE] User {} signed in", id);
        self.session = Some(id);
        self.persist();
        Ok(())
    }

    pub fn register(&mut self, name: &str, email: &str, password: &str) -> Result<User, StoreError> {
        if self.users.iter().any(|u| u.email == email) {
            return Err(StoreError::DuplicateEmail);
        }
        let user = User {
            id: new_id(),
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            rating: 0.0,
            reviews: vec![],
            location: None,
        };
        log!("[STORE] Registered user {}", user.id);
        self.session = Some(user.id.clone());
        self.users.push(user.clone());
        self.persist();
        Ok(user)
    }

    pub fn logout(&mut self) {
        self.session = None;
        self.persist();
    }

    // Listings

    pub fn add_item(&mut self, fields: NewItem) -> Result<Item, StoreError> {
        let owner = self.session_id()?;
        let item = Item {
            id: new_id(),
            user_id: owner,
            title: fields.title,
            description: fields.description,
            category: fields.category,
            images: fields.images,
            listing_type: fields.listing_type,
            price: fields.price,
            original_price: fields.original_price,
            is_bidding_enabled: fields.is_bidding_enabled,
            current_bid: fields.current_bid,
            highest_bidder_id: None,
            bidding_end_date: fields.bidding_end_date,
            location: fields.location,
            status: ItemStatus::Available,
            rent_duration: fields.rent_duration,
            created_at: Utc::now(),
        };
        log!("[STORE] Listed item {} for {}", item.id, item.user_id);
        self.items.push(item.clone());
        self.persist();
        Ok(item)
    }

    /// Overwrite the listing with the same id. Returns false when there is none.
    pub fn update_item(&mut self, item: Item) -> bool {
        match self.items.iter_mut().find(|i| i.id == item.id) {
            Some(slot) => {
                *slot = item;
                self.persist();
                true
            }
            None => false,
        }
    }

    pub fn delete_item(&mut self, item_id: &str) -> Option<Item> {
        let pos = self.items.iter().position(|i| i.id == item_id)?;
        let removed = self.items.remove(pos);
        log!("[STORE] Deleted item {}", item_id);
        self.persist();
        Some(removed)
    }

    pub fn place_bid(&mut self, item_id: &str, amount: f64) -> Result<(), StoreError> {
        let bidder = self.session_id()?;
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| StoreError::ItemNotFound(item_id.to_string()))?;
        if !item.is_bidding_enabled {
            return Err(StoreError::BiddingDisabled(item_id.to_string()));
        }
        if !amount.is_finite() {
            return Err(StoreError::InvalidAmount);
        }
        // a zero bid counts as no bid yet
        if let Some(current) = item.current_bid.filter(|c| *c != 0.0) {
            if amount <= current {
                return Err(StoreError::BidTooLow { current });
            }
        }
        item.current_bid = Some(amount);
        item.highest_bidder_id = Some(bidder);
        log!("[STORE] Accepted bid {} on item {}", amount, item_id);
        self.persist();
        Ok(())
    }

    // Messages and reviews

    pub fn send_message(
        &mut self,
        to_user_id: &str,
        item_id: &str,
        content: &str,
    ) -> Result<Message, StoreError> {
        let from = self.session_id()?;
        let message = Message {
            id: new_id(),
            from_user_id: from,
            to_user_id: to_user_id.to_string(),
            item_id: item_id.to_string(),
            content: content.to_string(),
            created_at: Utc::now(),
            read: false,
        };
        self.messages.push(message.clone());
        self.persist();
        Ok(message)
    }

    pub fn mark_message_read(&mut self, message_id: &str) -> bool {
        match self.messages.iter_mut().find(|m| m.id == message_id) {
            Some(message) if !message.read => {
                message.read = true;
                self.persist();
                true
            }
            _ => false,
        }
    }

    /// Record a review and recompute the reviewee's rating. A reviewee that
    /// does not exist still gets the review stored in the global list.
    pub fn add_review(
        &mut self,
        to_user_id: &str,
        rating: f64,
        comment: &str,
    ) -> Result<Review, StoreError> {
        let from = self.session_id()?;
        let review = Review {
            id: new_id(),
            from_user_id: from,
            to_user_id: to_user_id.to_string(),
            rating,
            comment: comment.to_string(),
            created_at: Utc::now(),
        };
        self.reviews.push(review.clone());
        if let Some(user) = self.users.iter_mut().find(|u| u.id == to_user_id) {
            user.reviews.push(review.clone());
            user.rating = review::mean_rating(&user.reviews);
            log!("[STORE] User {} rating is now {:.2}", user.id, user.rating);
        }
        self.persist();
        Ok(review)
    }

    // Reads

    pub fn current_user(&self) -> Option<&User> {
        self.session.as_deref().and_then(|id| self.user(id))
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn owner_of(&self, item: &Item) -> Option<&User> {
        self.user(&item.user_id)
    }

    pub fn items_by_owner<'a>(&'a self, user_id: &'a str) -> impl Iterator<Item = &'a Item> + 'a {
        self.items.iter().filter(move |i| i.user_id == user_id)
    }

    pub fn inbox<'a>(&'a self, user_id: &'a str) -> impl Iterator<Item = &'a Message> + 'a {
        self.messages.iter().filter(move |m| m.to_user_id == user_id)
    }

    pub fn unread_count(&self, user_id: &str) -> usize {
        self.inbox(user_id).filter(|m| !m.read).count()
    }

    /// Owned copy of the whole state for observers.
    pub fn snapshot(&self) -> StoreState {
        StoreState {
            current_user: self.current_user().cloned(),
            users: self.users.clone(),
            items: self.items.clone(),
            messages: self.messages.clone(),
            reviews: self.reviews.clone(),
        }
    }
}

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::models::{GeoPoint, Item, ItemStatus, ListingType, Message, Review, User};

/// Layout version written next to the state.
pub const SNAPSHOT_VERSION: u32 = 0;

/// Immutable view of everything the store holds. This is also the shape
/// persisted under the store key.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StoreState {
    #[serde(default)]
    pub current_user: Option<User>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Envelope<S> {
    pub state: S,
    #[serde(default)]
    pub version: u32,
}

const NEW_YORK: GeoPoint = GeoPoint {
    lat: 40.7128,
    lng: -74.0060,
};

fn demo_user(id: &str, name: &str, email: &str, rating: f64) -> User {
    User {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        password: "password123".into(),
        rating,
        reviews: vec![],
        location: Some(NEW_YORK),
    }
}

#[allow(clippy::too_many_arguments)]
fn demo_item(
    id: &str,
    user_id: &str,
    title: &str,
    description: &str,
    category: &str,
    image: &str,
    listing_type: ListingType,
    price: f64,
    original_price: f64,
    current_bid: Option<f64>,
) -> Item {
    Item {
        id: id.into(),
        user_id: user_id.into(),
        title: title.into(),
        description: description.into(),
        category: category.into(),
        images: vec![image.into()],
        listing_type,
        price,
        original_price: Some(original_price),
        is_bidding_enabled: current_bid.is_some(),
        current_bid,
        highest_bidder_id: None,
        bidding_end_date: None,
        location: Some(NEW_YORK),
        status: ItemStatus::Available,
        rent_duration: None,
        created_at: Utc::now(),
    }
}

impl StoreState {
    /// Starter marketplace shown on a fresh profile.
    pub fn demo() -> Self {
        StoreState {
            current_user: None,
            users: vec![
                demo_user("1", "John Doe", "john@example.com", 4.5),
                demo_user("2", "Jane Smith", "jane@example.com", 4.8),
            ],
            items: vec![
                demo_item(
                    "1",
                    "1",
                    "Professional Lawn Mower",
                    "High-quality lawn mower, perfect for maintaining your garden. Weekly rental available.",
                    "tools",
                    "https://images.unsplash.com/photo-1590483736622-39da8acf7eb8",
                    ListingType::Rent,
                    45.0,
                    89.0,
                    None,
                ),
                demo_item(
                    "2",
                    "1",
                    "Mountain Bike",
                    "Premium mountain bike in excellent condition. Great for weekend adventures.",
                    "sports",
                    "https://images.unsplash.com/photo-1576435728678-68d0fbf94e91",
                    ListingType::Sell,
                    299.0,
                    599.0,
                    Some(320.0),
                ),
                demo_item(
                    "3",
                    "2",
                    "Pressure Washer",
                    "Powerful pressure washer for rent. Perfect for cleaning driveways and patios.",
                    "tools",
                    "https://images.unsplash.com/photo-1584515933487-779824d29309",
                    ListingType::Rent,
                    35.0,
                    65.0,
                    None,
                ),
            ],
            messages: vec![],
            reviews: vec![],
        }
    }
}

pub mod item;
pub mod message;
pub mod review;
pub mod user;

use serde::{Deserialize, Serialize};

pub use item::{Item, ItemStatus, ListingType, NewItem, RentWindow, PLACEHOLDER_IMAGE};
pub use message::Message;
pub use review::Review;
pub use user::User;

/// Approximate position of a user or listing. Records carry `Option<GeoPoint>`,
/// where `None` means the location is unknown.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

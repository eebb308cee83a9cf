use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::GeoPoint;

/// Image shown when a listing is created without one.
pub const PLACEHOLDER_IMAGE: &str = "https://images.unsplash.com/photo-1505740420928-5e560c06d30e";

/// Whether an item is offered for rent or for sale.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    #[default]
    Rent,
    Sell,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    #[default]
    Available,
    Rented,
    Sold,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RentWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub user_id: String, // owner
    pub title: String,
    pub description: String,
    pub category: String,
    pub images: Vec<String>,
    #[serde(rename = "type")]
    pub listing_type: ListingType,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub is_bidding_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_bid: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highest_bidder_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bidding_end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    pub status: ItemStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rent_duration: Option<RentWindow>,
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Percentage off the original price, rounded to the nearest whole number.
    pub fn discount_percent(&self) -> i64 {
        match self.original_price {
            Some(original) if original > 0.0 => {
                (((original - self.price) / original) * 100.0).round() as i64
            }
            _ => 0,
        }
    }

    /// The price a card should show: the running bid when bidding, else the asking price.
    pub fn display_price(&self) -> f64 {
        if self.is_bidding_enabled {
            self.current_bid.unwrap_or(self.price)
        } else {
            self.price
        }
    }

    pub fn listing_label(&self) -> &'static str {
        match self.listing_type {
            ListingType::Rent => "For Rent",
            ListingType::Sell => "For Sale",
        }
    }

    pub fn cover_image(&self) -> &str {
        self.images
            .first()
            .map(String::as_str)
            .filter(|url| !url.is_empty())
            .unwrap_or(PLACEHOLDER_IMAGE)
    }
}

/// Fields a user supplies when listing an item. Identity, owner, status and
/// creation time are filled in by the store.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewItem {
    pub title: String,
    pub description: String,
    pub category: String,
    pub images: Vec<String>,
    pub listing_type: ListingType,
    pub price: f64,
    pub original_price: Option<f64>,
    pub is_bidding_enabled: bool,
    pub current_bid: Option<f64>,
    pub bidding_end_date: Option<DateTime<Utc>>,
    pub location: Option<GeoPoint>,
    pub rent_duration: Option<RentWindow>,
}

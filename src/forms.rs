//! Validation for the marketplace forms. Views hand raw field text to these
//! functions and show the `Display` of any [`FormError`] they get back.
use thiserror::Error;

use crate::errors::StoreError;
use crate::models::{ListingType, NewItem, PLACEHOLDER_IMAGE};

/// Listing categories offered by the listing form, as (value, label).
pub const CATEGORIES: &[(&str, &str)] = &[
    ("electronics", "Electronics"),
    ("tools", "Tools"),
    ("sports", "Sports"),
    ("books", "Books"),
    ("other", "Other"),
];

pub const DEFAULT_CATEGORY: &str = "electronics";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("All fields are required")]
    MissingAccountFields,
    #[error("Invalid email or password")]
    InvalidLogin,
    #[error("Email already exists")]
    EmailTaken,
    #[error("Title, description, and price are required")]
    MissingListingFields,
    #[error("Price must be a number")]
    InvalidPrice,
    #[error("Rating must be between 1 and 5")]
    RatingOutOfRange,
    #[error("Bid must be a positive number")]
    InvalidBid,
    #[error("Message cannot be empty")]
    EmptyMessage,
    #[error("Please log in first")]
    SignedOut,
    #[error("{0}")]
    Rejected(String),
}

impl From<StoreError> for FormError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::InvalidCredentials => FormError::InvalidLogin,
            StoreError::DuplicateEmail => FormError::EmailTaken,
            StoreError::NotSignedIn => FormError::SignedOut,
            other => FormError::Rejected(other.to_string()),
        }
    }
}

fn blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn parse_number(raw: &str) -> Result<f64, FormError> {
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(FormError::InvalidPrice),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl AuthForm {
    /// Registration needs every field; login takes whatever was typed.
    pub fn validate_registration(&self) -> Result<(), FormError> {
        if blank(&self.name) || blank(&self.email) || blank(&self.password) {
            return Err(FormError::MissingAccountFields);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListingForm {
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub original_price: String, // optional
    pub listing_type: ListingType,
    pub is_bidding_enabled: bool,
    pub image_url: String,
}

impl Default for ListingForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
            price: String::new(),
            original_price: String::new(),
            listing_type: ListingType::Rent,
            is_bidding_enabled: false,
            image_url: String::new(),
        }
    }
}

impl ListingForm {
    pub fn to_new_item(&self) -> Result<NewItem, FormError> {
        if blank(&self.title) || blank(&self.description) || blank(&self.price) {
            return Err(FormError::MissingListingFields);
        }
        let price = parse_number(&self.price)?;
        let original_price = if blank(&self.original_price) {
            None
        } else {
            Some(parse_number(&self.original_price)?)
        };
        let image = if blank(&self.image_url) {
            PLACEHOLDER_IMAGE.to_string()
        } else {
            self.image_url.trim().to_string()
        };
        let category = if blank(&self.category) {
            DEFAULT_CATEGORY.to_string()
        } else {
            self.category.clone()
        };

        Ok(NewItem {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            category,
            images: vec![image],
            listing_type: self.listing_type,
            price,
            original_price,
            is_bidding_enabled: self.is_bidding_enabled,
            ..NewItem::default()
        })
    }
}

pub fn parse_rating(raw: &str) -> Result<f64, FormError> {
    match raw.trim().parse::<f64>() {
        Ok(r) if (1.0..=5.0).contains(&r) => Ok(r),
        _ => Err(FormError::RatingOutOfRange),
    }
}

pub fn parse_bid(raw: &str) -> Result<f64, FormError> {
    match raw.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
        _ => Err(FormError::InvalidBid),
    }
}

pub fn validate_message(content: &str) -> Result<&str, FormError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(FormError::EmptyMessage);
    }
    Ok(trimmed)
}

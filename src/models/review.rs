// src/models/review.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub from_user_id: String, // reviewer
    pub to_user_id: String,   // reviewee
    pub rating: f64,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// Arithmetic mean of the given ratings, zero for an empty list.
pub fn mean_rating(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    reviews.iter().map(|r| r.rating).sum::<f64>() / reviews.len() as f64
}

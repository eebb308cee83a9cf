use serde::{Deserialize, Serialize};

use super::{GeoPoint, Review};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub rating: f64,            // mean of `reviews`, zero when empty
    pub reviews: Vec<Review>,   // reviews this user received
    #[serde(default)]
    pub location: Option<GeoPoint>,
}

impl User {
    /// First letter of the name, used for avatar badges.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }

    pub fn matches_credentials(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

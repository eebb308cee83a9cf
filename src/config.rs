/// Storage key the marketplace snapshot lives under.
pub const STORE_KEY: &str = "resource-sharing-store";

#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub storage_key: String,
    /// Start from the demo users and listings when the slot is empty.
    pub seed_demo_data: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: STORE_KEY.to_string(),
            seed_demo_data: true,
        }
    }
}

impl StoreConfig {
    pub fn empty() -> Self {
        Self {
            seed_demo_data: false,
            ..Self::default()
        }
    }
}

use thiserror::Error;

/// Reasons a store operation declined to change state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("no user is signed in")]
    NotSignedIn,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("email already exists")]
    DuplicateEmail,
    #[error("item {0} not found")]
    ItemNotFound(String),
    #[error("bidding is not enabled for item {0}")]
    BiddingDisabled(String),
    #[error("bid must be higher than the current bid of {current}")]
    BidTooLow { current: f64 },
    #[error("bid amount must be a finite number")]
    InvalidAmount,
}

/// Failures reading or writing a persistence slot.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("storage slot unavailable: {0}")]
    Unavailable(String),
    #[error("storage slot i/o failed: {0}")]
    Io(String),
    #[error("snapshot encoding failed: {0}")]
    Codec(#[from] serde_json::Error),
}

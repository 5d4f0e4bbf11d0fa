//! Error types for the cafe UI.

use thiserror::Error;

/// Result type alias using [`CafeError`].
pub type Result<T> = std::result::Result<T, CafeError>;

/// Everything that can go wrong while loading the menu, editing a cart or
/// talking to the backend services.
#[derive(Error, Debug)]
pub enum CafeError {
    /// Connection refused, DNS failure, broken body stream, ...
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status
    #[error("Request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    /// The response body was not the JSON we expected
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The catalog returned something that cannot be used as a menu
    #[error("Invalid menu: {0}")]
    InvalidMenu(String),

    /// An item id that is not on the current menu
    #[error("Item {0} is not on the menu")]
    UnknownItem(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CafeError {
    /// Convenience constructor for [`CafeError::Config`].
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

use std::fmt;

use async_trait::async_trait;

use super::types::{Character, CharacterQuery};

/// Errors that can occur while fetching the character page.
/// All of them collapse into the same user-facing message.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// API returned a non-success status.
    Api { status: u16, message: String },
    /// Body was not the expected envelope (bad JSON, missing `items`).
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Why an avatar could not be loaded. Never shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageLoadError {
    Network(String),
    Status(u16),
    /// The server answered with something that isn't an image.
    NotAnImage(String),
}

impl fmt::Display for ImageLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageLoadError::Network(msg) => write!(f, "image network error: {msg}"),
            ImageLoadError::Status(status) => write!(f, "image request failed (HTTP {status})"),
            ImageLoadError::NotAnImage(content_type) => {
                write!(f, "not an image (content-type: {content_type})")
            }
        }
    }
}

impl std::error::Error for ImageLoadError {}

#[async_trait]
pub trait CharacterSource: Send + Sync {
    /// Returns the name of the source, for logging.
    fn name(&self) -> &str;

    /// Fetches one page of characters, preserving server order.
    async fn fetch_characters(
        &self,
        query: &CharacterQuery,
    ) -> Result<Vec<Character>, FetchError>;

    /// Loads an avatar resource. `Ok` means the image is displayable.
    async fn load_image(&self, uri: &str) -> Result<(), ImageLoadError>;
}

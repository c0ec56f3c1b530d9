pub mod client;
pub mod source;
pub mod types;

pub use client::{DEFAULT_BASE_URL, HttpCharacterSource};
pub use source::{CharacterSource, FetchError, ImageLoadError};
pub use types::{
    ALIVE_STATUS, Avatar, Character, CharacterEnvelope, CharacterQuery, PLACEHOLDER_IMAGE_PATH,
};

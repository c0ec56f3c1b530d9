//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use async_trait::async_trait;

use crate::api::{Character, CharacterQuery, CharacterSource, FetchError, ImageLoadError};

/// A no-op source for tests that don't need real API calls.
pub struct NoopSource;

#[async_trait]
impl CharacterSource for NoopSource {
    fn name(&self) -> &str {
        "noop"
    }

    async fn fetch_characters(
        &self,
        _query: &CharacterQuery,
    ) -> Result<Vec<Character>, FetchError> {
        Ok(Vec::new())
    }

    async fn load_image(&self, _uri: &str) -> Result<(), ImageLoadError> {
        Ok(())
    }
}

/// Creates a test App with a NoopSource.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(NoopSource))
}

/// Builds a character with the fields tests usually care about.
pub fn character(id: i64, name: &str, status: &str, image: Option<&str>) -> Character {
    Character {
        id,
        name: name.to_string(),
        gender: "Male".to_string(),
        status: status.to_string(),
        species: "Human".to_string(),
        image: image.map(str::to_string),
    }
}

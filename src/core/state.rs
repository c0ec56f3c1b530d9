//! # View State
//!
//! Everything the character list view knows. No TUI types here;
//! presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── source: Arc<dyn CharacterSource>   // where characters come from
//! ├── characters: Vec<Character>         // response order, replaced once
//! ├── loading: bool                      // true until the fetch settles
//! ├── error: Option<String>              // fixed message on failure
//! ├── image_status: HashMap              // avatar load status, keyed by id
//! ├── placeholder_path: String           // local fallback avatar
//! ├── activated: bool                    // Activate already handled
//! └── deactivated: bool                  // view torn down, drop late results
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::collections::HashMap;
use std::sync::Arc;

use crate::api::{Avatar, Character, CharacterSource, PLACEHOLDER_IMAGE_PATH};
use crate::core::config::ResolvedConfig;

/// User-facing text for any fetch failure. Not localized, carries no detail.
pub const FETCH_ERROR_MESSAGE: &str = "Error al cargar los personajes desde la API.";

/// Load status of a character's remote avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStatus {
    Pending,
    Loaded,
    Failed,
}

/// Which body the view shows once precedence is applied.
/// Loading wins over everything, then error, then empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Loading,
    Error,
    Empty,
    Populated,
}

/// What is drawn underneath the loading overlay (if any).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Body<'a> {
    /// Still loading with nothing to show yet.
    Blank,
    Error(&'a str),
    Empty,
    Cards(&'a [Character]),
}

pub struct App {
    pub source: Arc<dyn CharacterSource>,
    pub characters: Vec<Character>,
    pub loading: bool,
    pub error: Option<String>,
    pub image_status: HashMap<i64, ImageStatus>,
    pub placeholder_path: String,
    pub activated: bool,
    pub deactivated: bool,
}

impl App {
    pub fn new(source: Arc<dyn CharacterSource>) -> Self {
        Self {
            source,
            characters: Vec::new(),
            loading: true,
            error: None,
            image_status: HashMap::new(),
            placeholder_path: PLACEHOLDER_IMAGE_PATH.to_string(),
            activated: false,
            deactivated: false,
        }
    }

    pub fn from_config(source: Arc<dyn CharacterSource>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(source);
        app.placeholder_path = config.placeholder_path.clone();
        app
    }

    pub fn display_mode(&self) -> DisplayMode {
        if self.loading {
            DisplayMode::Loading
        } else if self.error.is_some() {
            DisplayMode::Error
        } else if self.characters.is_empty() {
            DisplayMode::Empty
        } else {
            DisplayMode::Populated
        }
    }

    /// The body, independent of the overlay. The empty message only appears
    /// once loading is over; an error always hides it.
    pub fn body(&self) -> Body<'_> {
        if let Some(error) = &self.error {
            Body::Error(error)
        } else if self.characters.is_empty() {
            if self.loading { Body::Blank } else { Body::Empty }
        } else {
            Body::Cards(&self.characters)
        }
    }

    /// Avatar for a card: the remote image unless it is missing or failed to load.
    pub fn avatar_for<'a>(&'a self, character: &'a Character) -> Avatar<'a> {
        match character.image_uri() {
            Some(_) if self.image_status.get(&character.id) == Some(&ImageStatus::Failed) => {
                Avatar::Placeholder(&self.placeholder_path)
            }
            Some(uri) => Avatar::Remote(uri),
            None => Avatar::Placeholder(&self.placeholder_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{character, test_app};

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert!(app.loading);
        assert!(app.error.is_none());
        assert!(app.characters.is_empty());
        assert!(!app.activated);
        assert_eq!(app.placeholder_path, PLACEHOLDER_IMAGE_PATH);
        assert_eq!(app.display_mode(), DisplayMode::Loading);
        assert_eq!(app.body(), Body::Blank);
    }

    #[test]
    fn test_loading_takes_precedence_over_error() {
        let mut app = test_app();
        app.error = Some(FETCH_ERROR_MESSAGE.to_string());
        assert_eq!(app.display_mode(), DisplayMode::Loading);
        // The error still sits under the overlay
        assert_eq!(app.body(), Body::Error(FETCH_ERROR_MESSAGE));
    }

    #[test]
    fn test_error_takes_precedence_over_empty() {
        let mut app = test_app();
        app.loading = false;
        app.error = Some(FETCH_ERROR_MESSAGE.to_string());
        assert_eq!(app.display_mode(), DisplayMode::Error);
        assert_eq!(app.body(), Body::Error(FETCH_ERROR_MESSAGE));
    }

    #[test]
    fn test_empty_and_populated() {
        let mut app = test_app();
        app.loading = false;
        assert_eq!(app.display_mode(), DisplayMode::Empty);
        assert_eq!(app.body(), Body::Empty);

        app.characters = vec![character(1, "Fry", "ALIVE", None)];
        assert_eq!(app.display_mode(), DisplayMode::Populated);
        assert!(matches!(app.body(), Body::Cards(cards) if cards.len() == 1));
    }

    #[test]
    fn test_avatar_placeholder_when_image_missing() {
        let app = test_app();
        let fry = character(1, "Fry", "ALIVE", None);
        assert_eq!(app.avatar_for(&fry), Avatar::Placeholder(PLACEHOLDER_IMAGE_PATH));

        let blank = character(2, "Leela", "ALIVE", Some(""));
        assert_eq!(app.avatar_for(&blank), Avatar::Placeholder(PLACEHOLDER_IMAGE_PATH));
    }

    #[test]
    fn test_avatar_swaps_to_placeholder_after_failure() {
        let mut app = test_app();
        let bender = character(3, "Bender", "ALIVE", Some("https://img/bender.png"));

        assert_eq!(app.avatar_for(&bender), Avatar::Remote("https://img/bender.png"));

        app.image_status.insert(3, ImageStatus::Pending);
        assert_eq!(app.avatar_for(&bender), Avatar::Remote("https://img/bender.png"));

        app.image_status.insert(3, ImageStatus::Failed);
        assert_eq!(app.avatar_for(&bender), Avatar::Placeholder(PLACEHOLDER_IMAGE_PATH));
    }

    #[test]
    fn test_avatar_uses_configured_placeholder() {
        let mut app = test_app();
        app.placeholder_path = "/opt/roster/placeholder.png".to_string();
        let fry = character(1, "Fry", "ALIVE", None);
        assert_eq!(app.avatar_for(&fry).source(), "/opt/roster/placeholder.png");
    }
}
